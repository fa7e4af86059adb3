pub(crate) mod panels;
