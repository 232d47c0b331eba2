mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const SERVER_NAME: &str = "song";
pub const SERVER_VERSION: &str =
    const_format::concatcp!(built_info::PKG_VERSION, " (", built_info::PROFILE, ")");
