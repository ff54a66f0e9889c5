//! Smallest files the parsers accept, built in memory for tests.

use std::path::{Path, PathBuf};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, stereo. 417 bytes per frame.
pub(crate) fn mp3() -> Vec<u8> {
    let mut out = Vec::new();
    for _ in 0..20 {
        let mut frame = vec![0u8; 417];
        frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        out.extend_from_slice(&frame);
    }
    out
}

/// `fLaC` marker and a single STREAMINFO block: 44.1 kHz, stereo, 16 bit, one second.
pub(crate) fn flac() -> Vec<u8> {
    let mut out = b"fLaC".to_vec();
    // last-metadata-block flag set, type 0, length 34
    out.extend_from_slice(&[0x80, 0x00, 0x00, 0x22]);
    out.extend_from_slice(&4096u16.to_be_bytes());
    out.extend_from_slice(&4096u16.to_be_bytes());
    out.extend_from_slice(&[0, 0, 0]);
    out.extend_from_slice(&[0, 0, 0]);
    let packed: u64 = (44_100u64 << 44) | (1u64 << 41) | (15u64 << 36) | 44_100;
    out.extend_from_slice(&packed.to_be_bytes());
    out.extend_from_slice(&[0u8; 16]);
    // stand-in for audio frames
    out.extend_from_slice(&[0u8; 64]);
    out
}

/// `ftyp`, `mdat`, then a `moov` with one sound track and empty sample tables.
pub(crate) fn m4a() -> Vec<u8> {
    m4a_with_handler(b"soun")
}

/// Same layout as [`m4a`], but the only track is a video track, so the
/// container and its tags parse while audio properties do not.
pub(crate) fn m4a_without_audio() -> Vec<u8> {
    m4a_with_handler(b"vide")
}

fn m4a_with_handler(handler: &[u8; 4]) -> Vec<u8> {
    let mut ftyp = b"M4A ".to_vec();
    ftyp.extend_from_slice(&0u32.to_be_bytes());
    ftyp.extend_from_slice(b"M4A mp42isom");

    let mut out = atom(b"ftyp", &ftyp);
    out.extend(atom(b"mdat", &[0u8; 64]));
    out.extend(atom(b"moov", &[mvhd(), trak(handler)].concat()));
    out
}

fn atom(name: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = ((payload.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(name);
    out.extend_from_slice(payload);
    out
}

fn full_atom(name: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    atom(name, &[&[0u8; 4][..], payload].concat())
}

fn matrix() -> Vec<u8> {
    [0x0001_0000u32, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000]
        .iter()
        .flat_map(|v| v.to_be_bytes())
        .collect()
}

fn mvhd() -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(&0u32.to_be_bytes()); // creation
    p.extend_from_slice(&0u32.to_be_bytes()); // modification
    p.extend_from_slice(&1000u32.to_be_bytes()); // timescale
    p.extend_from_slice(&1000u32.to_be_bytes()); // duration
    p.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // rate
    p.extend_from_slice(&0x0100u16.to_be_bytes()); // volume
    p.extend_from_slice(&[0u8; 10]);
    p.extend(matrix());
    p.extend_from_slice(&[0u8; 24]);
    p.extend_from_slice(&2u32.to_be_bytes()); // next track id
    full_atom(b"mvhd", &p)
}

fn trak(handler: &[u8; 4]) -> Vec<u8> {
    let mut tkhd = Vec::new();
    tkhd.extend_from_slice(&0u32.to_be_bytes());
    tkhd.extend_from_slice(&0u32.to_be_bytes());
    tkhd.extend_from_slice(&1u32.to_be_bytes()); // track id
    tkhd.extend_from_slice(&[0u8; 4]);
    tkhd.extend_from_slice(&1000u32.to_be_bytes());
    tkhd.extend_from_slice(&[0u8; 8]);
    tkhd.extend_from_slice(&[0u8; 4]); // layer, alternate group
    tkhd.extend_from_slice(&0x0100u16.to_be_bytes());
    tkhd.extend_from_slice(&[0u8; 2]);
    tkhd.extend(matrix());
    tkhd.extend_from_slice(&[0u8; 8]); // width, height
    let tkhd = atom(b"tkhd", &[&[0u8, 0, 0, 7][..], &tkhd[..]].concat());

    let mut mdhd = Vec::new();
    mdhd.extend_from_slice(&0u32.to_be_bytes());
    mdhd.extend_from_slice(&0u32.to_be_bytes());
    mdhd.extend_from_slice(&44_100u32.to_be_bytes());
    mdhd.extend_from_slice(&44_100u32.to_be_bytes());
    mdhd.extend_from_slice(&0x55C4u16.to_be_bytes()); // "und"
    mdhd.extend_from_slice(&[0u8; 2]);
    let mdhd = full_atom(b"mdhd", &mdhd);

    let mut hdlr = vec![0u8; 4];
    hdlr.extend_from_slice(handler);
    hdlr.extend_from_slice(&[0u8; 12]);
    hdlr.push(0);
    let hdlr = full_atom(b"hdlr", &hdlr);

    let mut mp4a = vec![0u8; 6];
    mp4a.extend_from_slice(&1u16.to_be_bytes()); // data reference index
    mp4a.extend_from_slice(&[0u8; 8]); // version, revision, vendor
    mp4a.extend_from_slice(&2u16.to_be_bytes()); // channels
    mp4a.extend_from_slice(&16u16.to_be_bytes()); // sample size
    mp4a.extend_from_slice(&[0u8; 4]); // compression id, packet size
    mp4a.extend_from_slice(&(44_100u32 << 16).to_be_bytes());
    let mp4a = atom(b"mp4a", &mp4a);

    let stsd = full_atom(b"stsd", &[&1u32.to_be_bytes()[..], &mp4a[..]].concat());
    let stts = full_atom(b"stts", &0u32.to_be_bytes());
    let stsc = full_atom(b"stsc", &0u32.to_be_bytes());
    let stsz = full_atom(b"stsz", &[0u8; 8]);
    let stco = full_atom(b"stco", &0u32.to_be_bytes());
    let stbl = atom(b"stbl", &[stsd, stts, stsc, stsz, stco].concat());

    let smhd = full_atom(b"smhd", &[0u8; 4]);
    let minf = atom(b"minf", &[smhd, stbl].concat());
    let mdia = atom(b"mdia", &[mdhd, hdlr, minf].concat());

    atom(b"trak", &[tkhd, mdia].concat())
}

/// Write `bytes` to `dir/name` and return the path.
pub(crate) fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
