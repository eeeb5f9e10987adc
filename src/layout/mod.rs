pub(crate) mod autosize;
pub(crate) mod geometry;
pub(crate) mod measure;
