mod common;
mod mbti;
mod scoring;
