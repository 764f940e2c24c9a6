// Czech language data.

pub(crate) mod constants;
