use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The board/instrument category of a holding, as classified by the backend.
/// Determines which analysis bucket a (non-new) holding lands in.
///
/// The wire format is the backend's short code ("SH60", "CONV", ...).
/// Codes outside the known table deserialize to [`InstrumentType::Other`]
/// so the raw code survives a round-trip even though such holdings are
/// not tracked by any analysis bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstrumentType {
    /// Shanghai main board (6xxxxx codes)
    ShanghaiMain,
    /// Shenzhen main board (00xxxx codes)
    ShenzhenMain,
    /// ChiNext growth board (300xxx codes)
    ChiNext,
    /// STAR market (688xxx codes)
    Star,
    /// Beijing Stock Exchange
    Beijing,
    /// Tiered / leveraged funds
    FundTiered,
    /// On-exchange (listed) funds
    FundListed,
    /// Convertible bonds
    ConvertibleBond,
    /// Any code the category table does not know
    Other(String),
}

impl InstrumentType {
    /// The backend's short code for this category.
    pub fn wire_code(&self) -> &str {
        match self {
            InstrumentType::ShanghaiMain => "SH60",
            InstrumentType::ShenzhenMain => "SZ00",
            InstrumentType::ChiNext => "SZ300",
            InstrumentType::Star => "SH688",
            InstrumentType::Beijing => "BJ",
            InstrumentType::FundTiered => "FUNDAB",
            InstrumentType::FundListed => "FUNDIN",
            InstrumentType::ConvertibleBond => "CONV",
            InstrumentType::Other(code) => code,
        }
    }
}

impl From<String> for InstrumentType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "SH60" => InstrumentType::ShanghaiMain,
            "SZ00" => InstrumentType::ShenzhenMain,
            "SZ300" => InstrumentType::ChiNext,
            "SH688" => InstrumentType::Star,
            "BJ" => InstrumentType::Beijing,
            "FUNDAB" => InstrumentType::FundTiered,
            "FUNDIN" => InstrumentType::FundListed,
            "CONV" => InstrumentType::ConvertibleBond,
            _ => InstrumentType::Other(code),
        }
    }
}

impl From<InstrumentType> for String {
    fn from(t: InstrumentType) -> Self {
        t.wire_code().to_string()
    }
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstrumentType::ShanghaiMain => write!(f, "沪市主板"),
            InstrumentType::ShenzhenMain => write!(f, "深市主板"),
            InstrumentType::ChiNext => write!(f, "创业板"),
            InstrumentType::Star => write!(f, "科创板"),
            InstrumentType::Beijing => write!(f, "北交所"),
            InstrumentType::FundTiered => write!(f, "分级基金"),
            InstrumentType::FundListed => write!(f, "场内基金"),
            InstrumentType::ConvertibleBond => write!(f, "可转债"),
            InstrumentType::Other(code) => write!(f, "{code}"),
        }
    }
}

/// A single trade row inside a holding's operation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub date: NaiveDate,

    /// "B" buy / "S" sell, as emitted by the backend
    #[serde(rename = "type")]
    pub kind: String,

    pub price: f64,

    /// Number of shares/units in this trade
    pub count: i64,

    /// Commission + taxes charged on this trade
    pub fee: f64,

    /// Signed cash amount of the trade
    pub sum: f64,

    #[serde(default)]
    pub comment: String,
}

/// One holding row as served by `GET /api/` — price, cost, and per-day
/// offsets are all computed server-side; this crate never re-derives them.
///
/// Ratio fields are preformatted display strings ("1.23%") and stay as
/// strings on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Exchange ticker, e.g. "600036"
    pub code: String,

    pub name: String,

    /// Latest price as a display string (backend keeps trailing zeros)
    pub price_now: String,

    /// Today's profit/loss for the held position
    pub offset_today: f64,

    pub offset_today_ratio: String,

    /// Shares/units currently held
    pub hold_count: i64,

    /// Average cost of the current position
    pub hold_cost: f64,

    /// Cost basis including realized trades
    pub overall_cost: f64,

    /// Market value of the position now
    pub total_value: f64,

    pub total_value_yesterday: f64,

    /// Unrealized profit/loss on the current position
    pub offset_current: f64,

    pub offset_current_ratio: String,

    /// Lifetime profit/loss for this instrument (realized + unrealized)
    pub offset_total: f64,

    /// Today's profit/loss including positions closed today
    pub total_offset_today: f64,

    /// Full trade history for this instrument
    #[serde(default, rename = "operationList")]
    pub operations: Vec<Operation>,

    /// Newly-listed (IPO allotment) flag; overrides type-based bucketing
    pub is_new: bool,

    #[serde(rename = "stockType")]
    pub instrument_type: InstrumentType,

    /// Days since the position was opened
    pub holding_duration: i64,
}

impl Holding {
    /// Project this wire row down to the fields the aggregator reads.
    pub fn to_record(&self) -> HoldingRecord {
        HoldingRecord {
            code: self.code.clone(),
            is_new: self.is_new,
            instrument_type: self.instrument_type.clone(),
            net_profit_loss: self.offset_total,
        }
    }
}

/// Aggregator input: the slice of a holding that bucket classification
/// and profit/loss accumulation actually need. Callers that don't hold a
/// full [`Holding`] (tests, replays) can build these directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    pub code: String,
    pub is_new: bool,
    pub instrument_type: InstrumentType,
    pub net_profit_loss: f64,
}

impl HoldingRecord {
    pub fn new(
        code: impl Into<String>,
        is_new: bool,
        instrument_type: InstrumentType,
        net_profit_loss: f64,
    ) -> Self {
        Self {
            code: code.into(),
            is_new,
            instrument_type,
            net_profit_loss,
        }
    }
}
