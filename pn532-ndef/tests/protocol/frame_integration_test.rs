use pn532_ndef::protocol::{dcs, lcs, Frame};

#[test]
fn get_firmware_version_frame_known_vector() {
    // The canonical GetFirmwareVersion frame from the chip datasheet
    let frame = Frame::encode_command(&[0x02]).unwrap();
    assert_eq!(frame, [0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x02, 0x2A, 0x00]);
}

#[test]
fn every_encoded_frame_has_cancelling_checksums() {
    for payload in [
        &[0x14, 0x01, 0x14, 0x00][..],
        &[0x4A, 0x01, 0x00][..],
        &[0x32, 0x05, 0xFF, 0x01, 0xFF][..],
        &[0x58, 0x00][..],
    ] {
        let frame = Frame::encode_command(payload).unwrap();
        let len = frame[3];
        assert_eq!(len as usize, payload.len() + 1);
        assert_eq!(len.wrapping_add(frame[4]), 0);
        assert_eq!(frame[4], lcs(len));

        // Direction byte + payload + DCS sum to zero mod 256
        let body = &frame[5..frame.len() - 1];
        let sum = body.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        assert_eq!(sum, 0);
        assert_eq!(frame[frame.len() - 2], dcs(0xD4, payload));
    }
}

#[test]
fn response_decode_compacts_payload_to_front() {
    let payload = [0x03, 0x32, 0x01, 0x06, 0x07];
    let mut frame = Frame::encode_response(&payload).unwrap();
    // Trailing bus filler past the frame must not disturb decoding
    frame.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
    let n = Frame::decode_response(&mut frame).unwrap();
    assert_eq!(n, payload.len());
    assert_eq!(&frame[..n], &payload);
}

#[test]
fn corrupted_length_checksum_is_rejected() {
    let mut frame = Frame::encode_response(&[0x15]).unwrap();
    frame[3] = frame[3].wrapping_add(1);
    assert!(Frame::decode_response(&mut frame).is_err());
}
