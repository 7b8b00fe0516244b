// dgread/src/reader/handle.rs

use std::marker::PhantomData;

use crate::constants::SELECT_EMRTD_APDU;
use crate::protocol::{Command, DataGroupPayload, DgComReport, datagroup};
use crate::reader::config::ReaderConfig;
use crate::state::DocumentKeys;
use crate::transport::{Reply, Transport};
use crate::types::{ApduKind, CardType, DataGroup, ResponseBuffer};
use crate::utils::{bytes_to_hex, hex_to_bytes, trim_all};
use crate::{Error, Result};

/// Type-state markers
pub struct Disconnected;
pub struct Connected;

/// Reader session that enforces the connection state at compile time.
///
/// The session owns its transport exclusively and every transaction takes
/// `&mut self`, so at most one command is in flight at a time.
pub struct Reader<State = Disconnected> {
    transport: Box<dyn Transport>,
    config: ReaderConfig,
    _state: PhantomData<State>,
}

impl<State> Reader<State> {
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn into_state<Next>(self) -> Reader<Next> {
        Reader {
            transport: self.transport,
            config: self.config,
            _state: PhantomData,
        }
    }
}

impl Reader<Disconnected> {
    /// Create a Reader from an existing Transport instance with the default
    /// configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: ReaderConfig) -> Self {
        Self {
            transport,
            config,
            _state: PhantomData,
        }
    }

    /// Open the reader. Returns a connected Reader on success.
    pub fn connect(mut self) -> Result<Reader<Connected>> {
        let reply = self.transport.connect()?;
        if !reply.is_ok() {
            return Err(Error::Reader {
                code: reply.status,
                message: self.transport.last_error(),
            });
        }
        log::info!("reader connected");
        Ok(self.into_state())
    }
}

impl Reader<Connected> {
    /// Close the reader and hand back the disconnected session.
    pub fn disconnect(mut self) -> Result<Reader<Disconnected>> {
        let reply = self.transport.disconnect()?;
        self.check("disconnect", reply)?;
        log::info!("reader disconnected");
        Ok(self.into_state())
    }

    /// Probe the RF field for a card.
    pub fn check_card(&mut self) -> Result<CardType> {
        let code = self.transport.check_card()?;
        let card = CardType::from_code(code);
        log::debug!("check card: {} ({})", code, card);
        Ok(card)
    }

    /// Reset the reader and return its identification text.
    pub fn reset(&mut self) -> Result<String> {
        let mut info = ResponseBuffer::with_capacity(self.config.info_capacity);
        let reply = self.transport.reset(info.spare_mut())?;
        self.fill("reset", reply, &mut info)?;
        let text = String::from_utf8_lossy(info.as_bytes());
        Ok(text.trim_end_matches('\0').to_string())
    }

    /// Raise the RF field and return the card's ATR.
    pub fn rf_activate(&mut self) -> Result<ResponseBuffer> {
        let mut atr = ResponseBuffer::with_capacity(self.config.atr_capacity);
        let reply = self.transport.rf_activate(atr.spare_mut())?;
        self.fill("rf activate", reply, &mut atr)?;
        if atr.is_empty() {
            return Err(Error::Reader {
                code: reply.status,
                message: "no card answered RF activation".into(),
            });
        }
        log::debug!("RF active, ATR: {}", atr.to_hex_truncated());
        Ok(atr)
    }

    pub fn rf_release(&mut self) -> Result<()> {
        let reply = self.transport.rf_release()?;
        self.check("rf release", reply)?;
        Ok(())
    }

    /// Drop the field, wait for the card to power down, then raise it again.
    pub fn rf_reset(&mut self) -> Result<ResponseBuffer> {
        self.rf_release()?;
        if !self.config.rf_settle.is_zero() {
            std::thread::sleep(self.config.rf_settle);
        }
        self.rf_activate()
    }

    pub fn led(&mut self, red: u8, green: u8, blue: u8) -> Result<()> {
        self.execute(Command::Led { red, green, blue }, 64)?;
        Ok(())
    }

    /// Read the DG COM summary of data groups present on the chip.
    pub fn read_dg_com(&mut self) -> Result<DgComReport> {
        let resp = self.execute(Command::ReadDgCom, self.config.dg_capacity)?;
        DgComReport::parse(resp.raw(), resp.len())
    }

    /// Read a data group and return the undecoded response.
    pub fn read_dg_raw(&mut self, dg: DataGroup) -> Result<ResponseBuffer> {
        self.execute(Command::ReadDg(dg), self.config.dg_capacity)
    }

    /// Read a data group and decode it.
    pub fn read_dg(&mut self, dg: DataGroup) -> Result<DataGroupPayload> {
        let resp = self.read_dg_raw(dg)?;
        datagroup::decode(dg, resp.raw(), resp.len())
    }

    /// Read every data group the DG COM summary marks present, skipping the
    /// EAC-protected ones this reader cannot unlock.
    pub fn read_present_groups(&mut self) -> Result<Vec<(DataGroup, DataGroupPayload)>> {
        let report = self.read_dg_com()?;
        let mut out = Vec::new();
        for dg in report.present() {
            if dg.is_eac_protected() {
                log::info!("skipping EAC-protected {}", dg);
                continue;
            }
            out.push((dg, self.read_dg(dg)?));
        }
        Ok(out)
    }

    /// Send an APDU given as hex text; spaces are ignored.
    pub fn transmit_apdu(&mut self, kind: ApduKind, hex: &str) -> Result<ResponseBuffer> {
        let cmd = hex_to_bytes(&trim_all(hex))?;
        self.transmit_apdu_bytes(kind, &cmd)
    }

    pub fn transmit_apdu_bytes(&mut self, kind: ApduKind, cmd: &[u8]) -> Result<ResponseBuffer> {
        log::debug!(
            "APDU type {} -> {}",
            kind.as_char(),
            bytes_to_hex(cmd, cmd.len(), true)?
        );
        let mut resp = ResponseBuffer::with_capacity(self.config.apdu_capacity);
        let reply = self.transport.send_apdu(kind, cmd, resp.spare_mut())?;
        self.fill("send apdu", reply, &mut resp)?;
        self.trace_response(&resp);
        Ok(resp)
    }

    /// Read the card's identity text using keys taken from its data page.
    pub fn read_card_info(&mut self, keys: &DocumentKeys) -> Result<String> {
        if !keys.is_complete() {
            return Err(Error::InvalidArgument(
                "document number, birth date and expiry date are all required".into(),
            ));
        }
        log::info!("reading card info for document {}", keys.number);
        let mut out = ResponseBuffer::with_capacity(self.config.card_info_capacity);
        let reply = self.transport.read_card_info(keys, out.spare_mut())?;
        self.fill("read card info", reply, &mut out)?;
        let text = String::from_utf8_lossy(out.as_bytes());
        Ok(text.trim_end_matches('\0').to_string())
    }

    /// Cycle the RF field and select the eMRTD application over type A.
    pub fn select_emrtd_application(&mut self) -> Result<ResponseBuffer> {
        self.rf_reset()?;
        let resp = self.transmit_apdu_bytes(ApduKind::TypeA, &SELECT_EMRTD_APDU)?;
        if !resp.as_bytes().ends_with(&[0x90, 0x00]) {
            log::warn!("eMRTD select answered {}", resp.to_hex_truncated());
        }
        Ok(resp)
    }

    /// Execute a reader-private command into a buffer of `capacity` bytes.
    pub fn execute(&mut self, cmd: Command, capacity: usize) -> Result<ResponseBuffer> {
        let payload = cmd.encode();
        log::debug!(
            "{} -> {}",
            cmd.name(),
            bytes_to_hex(&payload, payload.len(), true)?
        );

        let mut resp = ResponseBuffer::with_capacity(capacity);
        let reply = self.transport.exec_command(&payload, resp.spare_mut())?;
        self.fill(&cmd.name(), reply, &mut resp)?;
        self.trace_response(&resp);
        Ok(resp)
    }

    fn check(&mut self, what: &str, reply: Reply) -> Result<()> {
        if reply.is_ok() {
            return Ok(());
        }
        let message = self.transport.last_error();
        log::warn!("{} failed: status={} {}", what, reply.status, message);
        Err(Error::Reader {
            code: reply.status,
            message,
        })
    }

    fn fill(&mut self, what: &str, reply: Reply, buf: &mut ResponseBuffer) -> Result<()> {
        self.check(what, reply)?;
        buf.set_len(reply.len)
    }

    fn trace_response(&self, resp: &ResponseBuffer) {
        log::debug!("recv {} bytes: {}", resp.len(), resp.to_hex_truncated());
        #[cfg(feature = "diagnostics")]
        log::trace!(
            "recv full: {}",
            bytes_to_hex(resp.raw(), resp.len(), true).unwrap_or_default()
        );
    }
}
