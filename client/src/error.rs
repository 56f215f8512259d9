//! Client error types.

use thiserror::Error;

/// Errors raised while setting up or driving the GPU renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The window could not back a wgpu surface.
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No adapter can present to the window's surface.
    #[error("no compatible GPU adapter found")]
    NoAdapter,

    /// The adapter refused to create a device.
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The surface offers nothing to render into.
    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,

    /// Acquiring the next frame failed.
    #[error("failed to acquire frame: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
