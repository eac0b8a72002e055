mod image_type;
mod prediction;
