use thiserror::Error;

/// Everything that can go wrong while loading config or bringing up the
/// window and GPU. Gameplay and text layout never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    /// The config file could not be read
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    /// The config file is not valid JSON for [`crate::config::GameConfig`]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    /// winit could not create or run the event loop
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    /// winit could not open the window
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error(transparent)]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error(transparent)]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}
