//! Snowflake - Generatore di identificativi univoci a 64 bit
//!
//! Gli id sono interi `i64` positivi, ordinati nel tempo e mai ripetuti
//! per tutta la vita del generatore.
//!
//! ```text
//! | 1 bit: 0 | 41 bits: ms dall'epoca | 10 bits: nodo | 12 bits: sequenza |
//! ```
//!
//! - **Timestamp**: millisecondi dal 2024-01-01 00:00:00 UTC (~69 anni)
//! - **Nodo**: identificativo dell'istanza (`NODE_ID`), 1024 valori
//! - **Sequenza**: contatore nel millisecondo (4096 id/ms per nodo)
//!
//! Il generatore è un componente posseduto dall'`AppState` e condiviso tra i
//! service tramite `Arc`; lo stato `(last_timestamp, sequence)` è protetto da
//! un `parking_lot::Mutex` tenuto solo per l'incremento.

use chrono::Utc;
use parking_lot::Mutex;
use thiserror::Error;

/// Epoca custom: 2024-01-01 00:00:00 UTC in millisecondi Unix.
pub const EPOCH_MS: i64 = 1_704_067_200_000;

const NODE_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;

/// Valore massimo ammesso per `NODE_ID`.
pub const MAX_NODE_ID: u16 = (1 << NODE_BITS) - 1;

const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;
const NODE_MASK: i64 = (1 << NODE_BITS) - 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnowflakeError {
    #[error("node id {0} out of range (max 1023)")]
    NodeIdOutOfRange(u16),

    #[error("system clock reads before the generator epoch")]
    ClockBeforeEpoch,
}

struct SnowflakeState {
    last_timestamp: i64,
    sequence: i64,
}

/// Generatore thread-safe di id snowflake.
pub struct SnowflakeGenerator {
    node_id: i64,
    state: Mutex<SnowflakeState>,
}

/// Componenti di un id, vedi [`decompose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeParts {
    /// Millisecondi dall'epoca custom
    pub timestamp_ms: i64,
    pub node_id: u16,
    pub sequence: u16,
}

impl SnowflakeGenerator {
    /// Crea il generatore per il nodo indicato.
    ///
    /// Fallisce (fail closed) se il nodo non entra in 10 bit o se l'orologio
    /// di sistema è precedente all'epoca: in quel caso nessun id generato
    /// sarebbe affidabile e il server non deve partire.
    pub fn new(node_id: u16) -> Result<Self, SnowflakeError> {
        if node_id > MAX_NODE_ID {
            return Err(SnowflakeError::NodeIdOutOfRange(node_id));
        }
        if current_millis() < 0 {
            return Err(SnowflakeError::ClockBeforeEpoch);
        }

        Ok(Self {
            node_id: i64::from(node_id),
            state: Mutex::new(SnowflakeState {
                last_timestamp: 0,
                sequence: 0,
            }),
        })
    }

    pub fn node_id(&self) -> u16 {
        self.node_id as u16
    }

    /// Genera un nuovo id.
    ///
    /// Se la sequenza del millisecondo è esaurita, o l'orologio torna
    /// indietro, il timestamp logico avanza oltre l'ultimo usato: gli id
    /// restano strettamente crescenti senza attese.
    pub fn generate(&self) -> i64 {
        let now = current_millis();
        let mut state = self.state.lock();

        if now > state.last_timestamp {
            state.last_timestamp = now;
            state.sequence = 0;
        } else {
            state.sequence += 1;
            if state.sequence > SEQUENCE_MASK {
                state.last_timestamp += 1;
                state.sequence = 0;
            }
        }

        (state.last_timestamp << (NODE_BITS + SEQUENCE_BITS))
            | (self.node_id << SEQUENCE_BITS)
            | state.sequence
    }
}

/// Scompone un id nei suoi campi.
pub fn decompose(id: i64) -> SnowflakeParts {
    SnowflakeParts {
        timestamp_ms: id >> (NODE_BITS + SEQUENCE_BITS),
        node_id: ((id >> SEQUENCE_BITS) & NODE_MASK) as u16,
        sequence: (id & SEQUENCE_MASK) as u16,
    }
}

// millisecondi dall'epoca custom, negativi se l'orologio è indietro
fn current_millis() -> i64 {
    Utc::now().timestamp_millis() - EPOCH_MS
}
