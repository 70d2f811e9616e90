use pathclose::svg::SerializerOptions;
use std::io;

pub struct PathCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub serializer: SerializerOptions,
    pub count: bool,
}

pub struct DocumentCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub serializer: SerializerOptions,
}
