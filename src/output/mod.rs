pub mod writer_txt;

pub use writer_txt::write_subdomains;
