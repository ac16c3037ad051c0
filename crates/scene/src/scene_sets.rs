//! Frame ordering for the scene via `SystemSet` phases in `Update`.
//!
//! ```text
//! Input  →  Transitions  →  Camera  →  Converged  →  Visual
//! ```
//!
//! * **Input** – Window input turned into `SceneRequest`/`BuildRequest`
//!   events and pointer raycasts. Lives in the rendering crate.
//! * **Transitions** – Requests applied to `SceneState` and `BuildMode`,
//!   held-district drag, idle tracking, ship patrols.
//! * **Camera** – Target resolution and one smoothing step of the rig.
//! * **Converged** – Convergence handed back to the state machine, which may
//!   open an overlay.
//! * **Visual** – Read-only consumers: meshes, gizmos, cursor, notices, UI.
//!
//! A request applied in a frame is seen by the camera in that same frame, and
//! an overlay opens in the frame the camera crosses the tolerance.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSet {
    Input,
    Transitions,
    Camera,
    Converged,
    Visual,
}
