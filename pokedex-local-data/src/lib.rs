mod capture;
mod storage;

pub use capture::CaptureStore;
pub use storage::{
    KeyValueStorage,
    LocalStorage,
    MemoryStorage,
};
