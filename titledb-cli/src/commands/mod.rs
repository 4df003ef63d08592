pub(crate) mod config;
pub(crate) mod lookup;
pub(crate) mod merge;
pub(crate) mod translate;
