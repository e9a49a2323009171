use crate::data::StoryDocument;
use crate::error::StoryConversionError;

/// A trait for custom data models that can be converted into a `StoryDocument`.
///
/// This is the extension point for feeding story trees authored in other
/// formats (exported editor projects, flat node lists, ...) into the traversal
/// utilities.
///
/// # Example
///
/// ```rust,no_run
/// use storytree::prelude::{IntoStory, NodeData, StoryConversionError, StoryDocument};
///
/// struct Chapter { id: String, heading: String, next: Vec<String> }
/// struct Book { chapters: Vec<Chapter> }
///
/// impl IntoStory for Book {
///     fn into_story(self) -> Result<StoryDocument, StoryConversionError> {
///         let mut document = StoryDocument::default();
///         for chapter in self.chapters {
///             document.structure.insert(chapter.id.clone(), chapter.next);
///             document
///                 .nodes
///                 .insert(chapter.id.clone(), NodeData::new(chapter.id, chapter.heading, ""));
///         }
///         Ok(document)
///     }
/// }
/// ```
pub trait IntoStory {
    /// Consumes the object and converts it into a story document.
    fn into_story(self) -> Result<StoryDocument, StoryConversionError>;
}
