pub(crate) mod backend;
pub(crate) mod parallel;
pub(crate) mod reference;
pub(crate) mod shade;
