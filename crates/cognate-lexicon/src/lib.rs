mod loader;
mod muse;

pub use loader::MuseLoader;
pub use muse::MuseLexicon;
