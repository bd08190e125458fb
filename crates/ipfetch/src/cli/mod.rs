mod app;
mod cat;
mod check;
mod cid;
mod source;

pub use app::App;
