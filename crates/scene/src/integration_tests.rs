//! End-to-end scene scenarios on the headless `TestScene` harness.
//!
//! Each test builds a full `ScenePlugin` app and drives it only through
//! `SceneRequest`/`BuildRequest` events and frame steps, the same way the
//! rendering and ui crates do.

mod build_mode_flow;
mod minigame;
mod navigation;
mod ship_follow;
