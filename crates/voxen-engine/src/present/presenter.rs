use crate::scene::Scene;

use super::{Screen, Window};

/// Render-pass seam between the event loop and an actual renderer.
///
/// The loop calls [`present`] once per cycle after dispatch. The engine
/// ships no renderer; hosts plug one in (or none, for headless runs).
///
/// [`present`]: ScenePresenter::present
pub trait ScenePresenter {
    fn present(&mut self, scene: &Scene, screen: &Screen, window: &Window);
}
