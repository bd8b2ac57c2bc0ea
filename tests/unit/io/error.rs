//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use ravenmatrix::AnalysisError;
    use ravenmatrix::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AnalysisError::FileSystem {
            path: "/tmp/problem".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read directory"));
    }

    // Tests DimensionMismatch names the figure and both sizes
    // Verified by swapping expected and found in the message
    #[test]
    fn test_dimension_mismatch_error() {
        let error = AnalysisError::DimensionMismatch {
            figure: "C".to_string(),
            expected: (184, 184),
            found: (184, 90),
        };

        assert_eq!(
            error.to_string(),
            "Figure 'C' is 184x90 but the problem's figures are 184x184"
        );
        assert!(error.source().is_none());
    }

    // Tests MissingFigure error formatting
    // Verified by omitting the name from the message
    #[test]
    fn test_missing_figure_error() {
        let error = AnalysisError::MissingFigure {
            name: "4".to_string(),
        };

        assert_eq!(error.to_string(), "Problem is missing figure '4'");
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("noise_threshold", &-1, &"must be non-negative");

        let message = error.to_string();
        assert!(message.contains("noise_threshold"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be non-negative"));
    }

    // Tests ImageLoad error with decoder source
    // Verified by excluding source error from message
    #[test]
    fn test_image_load_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = AnalysisError::ImageLoad {
            path: PathBuf::from("/restricted/A.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/A.png"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests conversions from library errors
    // Verified by mapping io errors to ImageLoad
    #[test]
    fn test_from_conversions() {
        let from_io: AnalysisError = std::io::Error::other("boom").into();
        assert!(matches!(from_io, AnalysisError::FileSystem { .. }));

        let from_image: AnalysisError =
            image::ImageError::IoError(std::io::Error::other("bad header")).into();
        assert!(matches!(from_image, AnalysisError::ImageLoad { .. }));
    }
}
