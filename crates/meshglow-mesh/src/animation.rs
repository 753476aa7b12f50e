//! Animation lifecycle: a run/stop state machine around the renderer.

use meshglow_core::AnimationSpeed;

use crate::renderer::MeshRenderer;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Stopped,
}

/// The animated mesh: draws one frame per tick while running.
///
/// Stopping is one-way. Each tick is synchronous start to finish, so once
/// stopped no further frame can be drawn no matter how often the host
/// keeps ticking.
#[derive(Debug)]
pub struct MeshAnimation {
    renderer: MeshRenderer,
    state: State,
    frames_drawn: u64,
}

impl MeshAnimation {
    /// Create an animation in the running state.
    pub fn new(speed: AnimationSpeed) -> Self {
        Self {
            renderer: MeshRenderer::new(speed),
            state: State::Running,
            frames_drawn: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.renderer.speed()
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.renderer.set_speed(speed);
    }

    /// Number of frames drawn so far.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Draw one frame if the animation is still running.
    pub fn tick(&mut self, elapsed_ms: u64, surface: &mut Surface) {
        if self.state == State::Stopped {
            return;
        }
        self.renderer.draw(surface, elapsed_ms);
        self.frames_drawn += 1;
    }

    /// Stop the animation. Further ticks draw nothing.
    pub fn stop(&mut self) {
        self.state = State::Stopped;
    }
}
