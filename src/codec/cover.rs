use std::path::Path;

use lofty::picture::{Picture, PictureType};
use lofty::tag::Tag;

use super::format::CoverReplacement;
use super::{
    CodecError, ContainerFormat, Result, collapse, media_tag, open, require, save, tag_for_write,
};

/// Bytes of the first embedded picture, empty when there is none.
pub fn read_cover_art(path: &Path) -> Vec<u8> {
    collapse("reading cover art", path, try_read_cover_art(path), Vec::new)
}

pub fn try_read_cover_art(path: &Path) -> Result<Vec<u8>> {
    let format = ContainerFormat::for_path(path);
    require(format.capabilities().reads_cover, "reading cover art", path)?;

    let tagged = open(path, false)?;
    let tag = media_tag(&tagged, format, "reading cover art", path)?;
    tag.pictures()
        .first()
        .map(|picture| picture.data().to_vec())
        .ok_or_else(|| CodecError::NotFound(format!("cover art in {}", path.display())))
}

/// Embed `image` as the front cover. `mime` is recorded as given, except for
/// M4A, which stores JPEG or PNG only.
pub fn write_cover_art(path: &Path, image: &[u8], mime: &str) -> bool {
    let result = try_write_cover_art(path, image, mime).map(|()| true);
    collapse("writing cover art", path, result, || false)
}

pub fn try_write_cover_art(path: &Path, image: &[u8], mime: &str) -> Result<()> {
    let format = ContainerFormat::for_path(path);
    require(format.capabilities().writes_cover, "writing cover art", path)?;
    let tag_type = format
        .media_tag_type()
        .ok_or_else(|| CodecError::unsupported("writing cover art", path))?;

    let mut tagged = open(path, false)?;
    let tag = tag_for_write(&mut tagged, tag_type, path)?;

    match format.cover_replacement() {
        CoverReplacement::FrontCovers => tag.remove_picture_type(PictureType::CoverFront),
        CoverReplacement::AllPictures => remove_all_pictures(tag),
    }

    let picture = Picture::unchecked(image.to_vec())
        .pic_type(PictureType::CoverFront)
        .mime_type(format.cover_mime(mime))
        .build();
    tag.push_picture(picture);

    save(tag, path)
}

fn remove_all_pictures(tag: &mut Tag) {
    let stored: Vec<PictureType> = tag.pictures().iter().map(|p| p.pic_type()).collect();
    for pic_type in stored {
        tag.remove_picture_type(pic_type);
    }
}
