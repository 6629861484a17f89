mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("lost".to_string());
        assert_eq!(err.to_string(), "device error: lost");
    }

    #[test]
    fn renderer_error_allocation_display() {
        let err = RendererError::AllocationFailure("out of memory".to_string());
        assert_eq!(err.to_string(), "buffer allocation failure: out of memory");
    }

    #[test]
    fn physical_size_copy_and_eq() {
        let a = PhysicalSize {
            width: 800,
            height: 600,
        };
        let b = a;
        assert_eq!(a, b);
    }
}
