pub(crate) mod host;
pub(crate) mod region;
pub(crate) mod scene;
