pub mod client;
pub mod draft;
pub mod models;
pub mod panel;
pub mod resource;

mod memory;
pub use memory::{MemoryBackend, MemoryError, RequestRecord};

pub use client::{ListQuery, Method, ResourceClient};
pub use draft::Draft;
pub use models::{Movie, NewMovie, NewNote, NewPhoto, NewPlan, NewSong, Note, Photo, Plan, RecordId, Song};
pub use panel::{refresh, submit, Panel, PanelState, Phase, Submitted};
pub use resource::{Creatable, FavoritePhotos, Movies, Notes, Photos, Plans, Resource, Songs};
