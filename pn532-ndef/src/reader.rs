// pn532-ndef/src/reader.rs

use std::marker::PhantomData;
use std::thread;

use log::{debug, trace, warn};

use crate::constants::{ACK, FRAME_OVERHEAD, SCRATCH_LEN, STATUS_READY};
use crate::protocol::{commands, responses, Frame};
use crate::transport::Transport;
use crate::types::{BaudModulation, FirmwareVersion, TargetInfo};
use crate::utils::{bytes_to_hex_spaced, DEFAULT_TIMEOUT_MS, POLL_INTERVAL};
use crate::{Error, Result};

/// Type-state marker: chip not yet configured.
pub struct Uninitialized;
/// Type-state marker: SAM configured, commands available.
pub struct Initialized;

/// Reader handle that enforces chip initialization at compile time. One
/// transaction is in flight at a time; the scratch buffer is overwritten on
/// every call and results are copied out before returning.
pub struct Reader<State = Uninitialized> {
    transport: Box<dyn Transport>,
    scratch: [u8; SCRATCH_LEN],
    _state: PhantomData<State>,
}

impl<State> Reader<State> {
    /// Read `len` payload bytes. The chip prefixes every read with one
    /// status byte, so the bus read is `len + 1` and the first byte is
    /// dropped.
    fn read_data(&mut self, len: usize) -> Result<()> {
        debug_assert!(len <= SCRATCH_LEN);
        let mut raw = [0u8; SCRATCH_LEN + 1];
        self.transport.read(&mut raw[..len + 1])?;
        self.scratch[..len].copy_from_slice(&raw[1..len + 1]);
        Ok(())
    }

    /// Poll the status byte every millisecond until the chip reports
    /// ready. A zero timeout waits forever.
    fn wait_ready(&mut self, timeout_ms: u64) -> Result<()> {
        let mut waited = 0u64;
        loop {
            if self.transport.status()? == STATUS_READY {
                return Ok(());
            }
            if timeout_ms != 0 {
                waited += 1;
                if waited > timeout_ms {
                    warn!("chip not ready after {}ms", timeout_ms);
                    return Err(Error::Timeout);
                }
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    /// Read the fixed 6-byte ack pattern and require an exact match.
    fn read_ack(&mut self) -> Result<()> {
        self.read_data(ACK.len())?;
        if self.scratch[..ACK.len()] != ACK {
            return Err(Error::AckMismatch);
        }
        Ok(())
    }

    /// Send a command payload and run the ack handshake: write frame, wait
    /// ready, read ack, wait ready again. Response parsing only happens
    /// after this succeeds.
    fn transact(&mut self, payload: &[u8], timeout_ms: u64) -> Result<()> {
        let frame = Frame::encode_command(payload)?;
        trace!("-> {}", bytes_to_hex_spaced(&frame));
        self.transport.write(&frame)?;

        self.wait_ready(timeout_ms)?;
        thread::sleep(POLL_INTERVAL);
        self.read_ack()?;
        thread::sleep(POLL_INTERVAL);
        self.wait_ready(timeout_ms)?;
        Ok(())
    }

    /// Read a response frame sized for `expected_data_len` payload bytes
    /// into the scratch buffer, validate it and compact the payload to the
    /// front. Returns the payload length (command echo first).
    fn parse_response(&mut self, expected_data_len: usize) -> Result<usize> {
        let total = expected_data_len + FRAME_OVERHEAD;
        if total > SCRATCH_LEN {
            return Err(Error::BufferTooSmall {
                needed: total,
                capacity: SCRATCH_LEN,
            });
        }
        self.read_data(total)?;
        let n = Frame::decode_response(&mut self.scratch[..total])?;
        trace!("<- {}", bytes_to_hex_spaced(&self.scratch[..n]));
        Ok(n)
    }
}

impl Reader<Uninitialized> {
    /// Wrap a transport. The chip is not touched until `initialize`.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            scratch: [0u8; SCRATCH_LEN],
            _state: PhantomData,
        }
    }

    /// Configure the SAM (required for reliable antenna operation) and
    /// return an initialized reader.
    pub fn initialize(self) -> Result<Reader<Initialized>> {
        let mut this = self;
        this.transact(&commands::sam_configuration(), DEFAULT_TIMEOUT_MS)?;
        let n = this.parse_response(1)?;
        responses::check_sam_configuration(&this.scratch[..n])?;
        debug!("sam configured");

        Ok(Reader {
            transport: this.transport,
            scratch: this.scratch,
            _state: PhantomData,
        })
    }
}

impl Reader<Initialized> {
    /// Chip firmware identification.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        self.transact(&commands::get_firmware_version(), DEFAULT_TIMEOUT_MS)?;
        let n = self.parse_response(5)?;
        responses::decode_firmware_version(&self.scratch[..n])
    }

    /// Number of activation attempts the chip makes per detection command;
    /// 0xFF retries until a tag appears.
    pub fn set_passive_activation_retries(&mut self, retries: u8) -> Result<()> {
        self.transact(
            &commands::set_passive_activation_retries(retries),
            DEFAULT_TIMEOUT_MS,
        )?;
        let n = self.parse_response(1)?;
        if n != 1 {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: n,
            });
        }
        Ok(())
    }

    /// Start the RF transceiver self-test. The test runs until another
    /// command is issued; the chip acks but sends no response frame.
    pub fn rf_regulation_test(&mut self) -> Result<()> {
        let frame = Frame::encode_command(&commands::rf_regulation_test())?;
        self.transport.write(&frame)?;
        thread::sleep(POLL_INTERVAL);
        self.wait_ready(DEFAULT_TIMEOUT_MS)?;
        self.read_ack()?;
        thread::sleep(POLL_INTERVAL);
        Ok(())
    }

    /// Wait for a tag to enter the field and select it. `Ok(None)` when
    /// the chip's retry budget ran out with no tag seen.
    pub fn detect_target(
        &mut self,
        baud: BaudModulation,
        timeout_ms: u64,
    ) -> Result<Option<TargetInfo>> {
        self.transact(&commands::in_list_passive_target(baud), timeout_ms)?;
        let n = self.parse_response(20)?;
        let target = responses::decode_passive_target(&self.scratch[..n])?;
        if let Some(ref t) = target {
            debug!("target uid {} atqa {:#06x} sak {:#04x}", t.uid.to_hex(), t.atqa, t.sak);
        }
        Ok(target)
    }

    /// Presence check with a delay budget. 500ms is a sensible budget for
    /// a tap-style interaction.
    pub fn tag_present(&mut self, delay_ms: u64) -> bool {
        matches!(
            self.detect_target(BaudModulation::Iso14443a, delay_ms),
            Ok(Some(_))
        )
    }

    /// Exchange raw bytes with the selected target. The reply is copied
    /// into `recv`; the received length is returned.
    pub fn data_exchange(&mut self, send: &[u8], recv: &mut [u8]) -> Result<usize> {
        self.transact(&commands::in_data_exchange(send), DEFAULT_TIMEOUT_MS)?;
        // Response carries the command echo and a status byte ahead of the
        // target's reply.
        let n = self.parse_response(recv.len() + 2)?;
        let data = responses::decode_data_exchange(&self.scratch[..n])?;
        if data.len() > recv.len() {
            return Err(Error::BufferTooSmall {
                needed: data.len(),
                capacity: recv.len(),
            });
        }
        recv[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    /// Detect a tag, read its user pages and decode the first NDEF record
    /// as a display string.
    pub fn read_first_record(&mut self, timeout_ms: u64) -> Result<String> {
        let target = self
            .detect_target(BaudModulation::Iso14443a, timeout_ms)?
            .ok_or(Error::NoTarget)?;
        debug!("reading tag {}", target.uid.to_hex());

        let mut image = vec![0u8; 888];
        let len = crate::ntag::read_user_pages(self, &mut image)?;
        if len == 0 {
            return Err(Error::TlvNotFound);
        }

        let tlv = crate::ndef::parse_tlv(&image[..len], 0).ok_or(Error::TlvNotFound)?;
        let records = crate::ndef::parse_message(tlv.value());
        let first = records.first().ok_or(Error::MalformedRecord { offset: 0 })?;
        crate::ndef::record_string(first)
    }
}
