use camera_preview::{Error, VideoFrame};

#[test]
fn accepts_a_frame_whose_bytes_match_its_dimensions() {
    let frame = VideoFrame::new(vec![0; 2 * 2 * 4], 2, 2, 0).unwrap();

    assert_eq!(frame.size(), (2, 2));
}

#[test]
fn rejects_a_frame_with_the_wrong_byte_length() {
    let result = VideoFrame::new(vec![0; 7], 2, 2, 3);

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[test]
fn rejects_a_frame_with_a_zero_dimension() {
    let result = VideoFrame::new(vec![], 0, 2, 0);

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}
