pub(crate) mod hits;
pub(crate) mod init_schema;
pub(crate) mod serve;
