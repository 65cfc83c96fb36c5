//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};

    use ucsgrid::SearchError;
    use ucsgrid::io::error::{WithPath, invalid_map, invalid_parameter, terminal_error};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = SearchError::MapLoad {
            path: "maps/missing.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("maps/missing.txt"));
        assert!(SearchError::QueueFull { capacity: 3 }.source().is_none());
    }

    // Tests queue errors name the capacity
    // Verified by omitting capacity from message
    #[test]
    fn test_queue_full_message() {
        let message = SearchError::QueueFull { capacity: 16 }.to_string();
        assert!(message.contains("full"));
        assert!(message.contains("16"));
    }

    // Tests negative priority errors show the value
    // Verified by omitting value from message
    #[test]
    fn test_invalid_priority_message() {
        let error = SearchError::InvalidPriority {
            value: "-4".to_string(),
        };
        assert!(error.to_string().contains("-4"));
    }

    // Tests range errors show the coordinates and the interior bounds
    // Verified by reporting the padded size as the bound
    #[test]
    fn test_coordinates_out_of_range_message() {
        let error = SearchError::CoordinatesOutOfRange {
            x: 9,
            y: 0,
            width: 6,
            height: 4,
        };

        let message = error.to_string();
        assert!(message.contains("(9, 0)"));
        assert!(message.contains("1..5"));
        assert!(message.contains("1..3"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("interval", &"-1", &"must not be negative");

        let message = error.to_string();
        assert!(message.contains("interval"));
        assert!(message.contains("-1"));
        assert!(message.contains("must not be negative"));
    }

    // Tests InvalidMap error carries its reason
    // Verified by dropping the reason
    #[test]
    fn test_invalid_map_error() {
        let message = invalid_map(&"map contains no terrain").to_string();
        assert!(message.contains("no terrain"));
    }

    // Tests terminal errors keep their source
    // Verified by discarding the source
    #[test]
    fn test_terminal_error() {
        let error = terminal_error(std::io::Error::other("not a tty"));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("not a tty"));
    }

    // Tests image errors get their path attached
    // Verified by keeping the placeholder path
    #[test]
    fn test_image_error_with_path() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let result: std::result::Result<(), image::ImageError> = Err(image_error);

        let error = result
            .with_path(Path::new("/restricted/run.gif"), "encode gif")
            .unwrap_err();
        match &error {
            SearchError::ImageExport { path, .. } => {
                assert_eq!(path, &PathBuf::from("/restricted/run.gif"));
            }
            _ => unreachable!("Expected ImageExport error type"),
        }
        assert!(error.source().is_some());
    }

    // Tests I/O errors get their path and operation attached
    // Verified by keeping the placeholder operation
    #[test]
    fn test_io_error_with_path() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk full"));

        let message = result
            .with_path(Path::new("out/run.gif"), "create file")
            .unwrap_err()
            .to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("out/run.gif"));
        assert!(message.contains("disk full"));
    }

    // Tests non-I/O errors pass through unchanged
    // Verified by wrapping every error as a file system error
    #[test]
    fn test_with_path_keeps_other_errors() {
        let result: std::result::Result<(), SearchError> =
            Err(SearchError::BrokenPath { cell: 12 });

        let error = result
            .with_path(Path::new("ignored"), "ignored")
            .unwrap_err();
        assert!(matches!(error, SearchError::BrokenPath { cell: 12 }));
    }
}
