mod model;

pub use model::StoryDocument;
