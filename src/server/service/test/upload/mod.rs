use crate::server::{
    error::AppError,
    service::upload::{ImageFile, UploadService, MAX_IMAGE_SIZE},
};

mod delete_image;
mod store_image;
mod store_images;
