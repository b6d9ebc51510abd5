#![allow(dead_code)]

pub mod loader;
pub mod summarizer;
pub mod video_info;
