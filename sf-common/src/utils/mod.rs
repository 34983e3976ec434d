pub mod sql_util;
