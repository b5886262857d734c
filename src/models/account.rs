//! Account summary models.

use crate::decode::{record_from_node, Amount, FromNode, Node, RecordInstance, Timestamp};
use crate::define_record;
use crate::models::ProsperRating;
use crate::schema::{FieldKind, FieldSchema, Record, RecordSchema, ValueKind};
use crate::Result;

define_record! {
    /// Cash balances and investment totals for the Prosper account.
    pub struct Account as ACCOUNT {
        /// Cash available to invest
        available_cash_balance: Option<Amount> => Number,
        /// Bids pending on the primary market
        pending_investments_primary_market: Option<Amount> => Number,
        /// Bids pending on the secondary market
        pending_investments_secondary_market: Option<Amount> => Number,
        /// Quick Invest orders not yet processed
        pending_quick_invest_orders: Option<Amount> => Number,
        /// Principal received on active notes
        total_principal_received_on_active_notes: Option<Amount> => Number,
        /// Amount invested in active notes
        total_amount_invested_on_active_notes: Option<Amount> => Number,
        /// Principal outstanding on active notes
        outstanding_principal_on_active_notes: Option<Amount> => Number,
        /// Cash plus outstanding principal plus pending investments
        total_account_value: Option<Amount> => Number,
        /// Deposits not yet cleared
        pending_deposit: Option<Amount> => Number,
        /// Most recent deposit
        last_deposit_amount: Option<Amount> => Number,
        /// When the most recent deposit was made
        last_deposit_date: Option<Timestamp> => DateTime,
        /// Most recent withdrawal (negative)
        last_withdraw_amount: Option<Amount> => Number,
        /// When the most recent withdrawal was made
        last_withdraw_date: Option<Timestamp> => DateTime,
        /// External user identifier
        external_user_id: Option<String> => Str,
        /// Account digest
        prosper_account_digest: Option<String> => Str,
        /// Outstanding principal by rating
        invested_notes: Option<AmountsByRating> => Record(AMOUNTS_BY_RATING),
        /// Pending bid amounts by rating
        pending_bids: Option<AmountsByRating> => Record(AMOUNTS_BY_RATING),
    }
}

/// Amounts broken down by Prosper rating.
///
/// The wire keys are the upper-case rating codes (`NA`, `HR`, ... `AA`),
/// so this record is declared by hand rather than with `define_record!`.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountsByRating {
    /// Unrated (`NA`)
    pub na: Option<Amount>,
    /// HR
    pub hr: Option<Amount>,
    /// E
    pub e: Option<Amount>,
    /// D
    pub d: Option<Amount>,
    /// C
    pub c: Option<Amount>,
    /// B
    pub b: Option<Amount>,
    /// A
    pub a: Option<Amount>,
    /// AA
    pub aa: Option<Amount>,
}

const fn rating_field(name: &'static str) -> FieldSchema {
    FieldSchema {
        name,
        kind: FieldKind::Single(ValueKind::Number),
        optional: true,
    }
}

/// Schema descriptor for [`AmountsByRating`].
pub static AMOUNTS_BY_RATING: RecordSchema = RecordSchema {
    name: "AmountsByRating",
    fields: &[
        rating_field("NA"),
        rating_field("HR"),
        rating_field("E"),
        rating_field("D"),
        rating_field("C"),
        rating_field("B"),
        rating_field("A"),
        rating_field("AA"),
    ],
};

impl AmountsByRating {
    /// The amount for a rating. `NR` and `N/A` both read the `NA` bucket.
    pub fn get(&self, rating: ProsperRating) -> Option<&Amount> {
        match rating {
            ProsperRating::NR | ProsperRating::NotApplicable => self.na.as_ref(),
            ProsperRating::HR => self.hr.as_ref(),
            ProsperRating::E => self.e.as_ref(),
            ProsperRating::D => self.d.as_ref(),
            ProsperRating::C => self.c.as_ref(),
            ProsperRating::B => self.b.as_ref(),
            ProsperRating::A => self.a.as_ref(),
            ProsperRating::AA => self.aa.as_ref(),
        }
    }
}

impl Record for AmountsByRating {
    fn schema() -> &'static RecordSchema {
        &AMOUNTS_BY_RATING
    }

    fn from_record(mut record: RecordInstance) -> Result<Self> {
        Ok(Self {
            na: record.take("NA")?,
            hr: record.take("HR")?,
            e: record.take("E")?,
            d: record.take("D")?,
            c: record.take("C")?,
            b: record.take("B")?,
            a: record.take("A")?,
            aa: record.take("AA")?,
        })
    }
}

impl FromNode for AmountsByRating {
    fn from_node(node: Node) -> Result<Self> {
        record_from_node(node)
    }
}
