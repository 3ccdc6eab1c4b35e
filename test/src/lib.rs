
pub use helpers::*;
pub use test_scene::{SceneOp, TestBeamLine, TestEntity, TestScene};
