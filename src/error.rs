//! Error types for the widget.
//!
//! There are only two fatal failure families, both one-shot at
//! initialization: the surface cannot provide a rendering context, or the
//! point-sprite program fails to compile/link. Everything else (empty
//! particle field, fully transparent bitmap, pointer absent) is a valid
//! steady state, not an error.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The point-sprite shader failed to compile or the pipeline failed to
    /// link. Carries the backend compiler's diagnostic text.
    ShaderCompile(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::AdapterRequest(e) => write!(
                f,
                "No compatible GPU adapter found ({}). Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.",
                e
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::ShaderCompile(log) => write!(f, "Point-sprite shader failed to build: {}", log),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::AdapterRequest(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::ShaderCompile(_) => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::AdapterRequest(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur while loading the logo bitmap.
#[derive(Debug)]
pub enum BitmapError {
    /// Failed to decode the image data.
    ImageLoad(image::ImageError),
    /// Failed to read the file from disk.
    Io(std::io::Error),
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::ImageLoad(e) => write!(f, "Failed to decode logo bitmap: {}", e),
            BitmapError::Io(e) => write!(f, "Failed to read logo bitmap: {}", e),
        }
    }
}

impl std::error::Error for BitmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BitmapError::ImageLoad(e) => Some(e),
            BitmapError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for BitmapError {
    fn from(e: image::ImageError) -> Self {
        BitmapError::ImageLoad(e)
    }
}

impl From<std::io::Error> for BitmapError {
    fn from(e: std::io::Error) -> Self {
        BitmapError::Io(e)
    }
}

/// Errors that can occur when running the widget.
#[derive(Debug)]
pub enum WidgetError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// The logo bitmap could not be loaded.
    Bitmap(BitmapError),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            WidgetError::Window(e) => write!(f, "Failed to create window: {}", e),
            WidgetError::Gpu(e) => write!(f, "GPU error: {}", e),
            WidgetError::Bitmap(e) => write!(f, "Bitmap error: {}", e),
        }
    }
}

impl std::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WidgetError::EventLoop(e) => Some(e),
            WidgetError::Window(e) => Some(e),
            WidgetError::Gpu(e) => Some(e),
            WidgetError::Bitmap(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for WidgetError {
    fn from(e: winit::error::EventLoopError) -> Self {
        WidgetError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for WidgetError {
    fn from(e: winit::error::OsError) -> Self {
        WidgetError::Window(e)
    }
}

impl From<GpuError> for WidgetError {
    fn from(e: GpuError) -> Self {
        WidgetError::Gpu(e)
    }
}

impl From<BitmapError> for WidgetError {
    fn from(e: BitmapError) -> Self {
        WidgetError::Bitmap(e)
    }
}
