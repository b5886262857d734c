//! Note models.

use crate::decode::{Amount, DateValue, EnumValue};
use crate::define_record;
use crate::models::{ProsperRating, PROSPER_RATING};

define_record! {
    /// A fractional note owned by the account.
    ///
    /// `*_pro_rata_share` amounts are the account's share of the
    /// underlying loan's totals.
    pub struct Note as NOTE {
        /// Note identifier, `<loan number>-<note number>`
        loan_note_id: String => Str,
        /// Listing the note came from
        listing_number: Option<i64> => Integer,
        /// Underlying loan
        loan_number: Option<i64> => Integer,
        /// Outstanding principal
        principal_balance_pro_rata_share: Option<Amount> => Number,
        /// Servicing fees paid (negative)
        service_fees_paid_pro_rata_share: Option<Amount> => Number,
        /// Principal repaid
        principal_paid_pro_rata_share: Option<Amount> => Number,
        /// Interest paid
        interest_paid_pro_rata_share: Option<Amount> => Number,
        /// Prosper fees paid
        prosper_fees_paid_pro_rata_share: Option<Amount> => Number,
        /// Late fees paid
        late_fees_paid_pro_rata_share: Option<Amount> => Number,
        /// Collection fees paid
        collection_fees_paid_pro_rata_share: Option<Amount> => Number,
        /// Debt sale proceeds received
        debt_sale_proceeds_received_pro_rata_share: Option<Amount> => Number,
        /// Net platform proceeds received
        platform_proceeds_net_received: Option<Amount> => Number,
        /// Next payment amount due
        next_payment_due_amount_pro_rata_share: Option<Amount> => Number,
        /// Amount originally invested in the note
        note_ownership_amount: Option<Amount> => Number,
        /// Gross proceeds from selling the note
        note_sale_gross_amount_received: Option<Amount> => Number,
        /// Fees paid selling the note
        note_sale_fees_paid: Option<Amount> => Number,
        /// Note status code
        note_status: Option<i64> => Integer,
        /// Note status label
        note_status_description: Option<String> => Str,
        /// Default reason code
        note_default_reason: Option<i64> => Integer,
        /// Default reason label
        note_default_reason_description: Option<String> => Str,
        /// Whether the note was sold
        is_sold: Option<bool> => Boolean,
        /// Whether the note was sold on Folio
        is_sold_folio: Option<bool> => Boolean,
        /// Loan amount
        amount_borrowed: Option<Amount> => Number,
        /// Borrower's interest rate
        borrower_rate: Option<Amount> => Number,
        /// Yield to the lender
        lender_yield: Option<Amount> => Number,
        /// Prosper rating
        prosper_rating: Option<EnumValue<ProsperRating>> => Enum(PROSPER_RATING),
        /// Term in months
        term: Option<i64> => Integer,
        /// Age in months
        age_in_months: Option<i64> => Integer,
        /// Interest accrued
        accrued_interest: Option<Amount> => Number,
        /// Total payments received
        payment_received: Option<Amount> => Number,
        /// Settlement status
        loan_settlement_status: Option<String> => Str,
        /// Extension status
        loan_extension_status: Option<String> => Str,
        /// Extension term in months
        loan_extension_term: Option<i64> => Integer,
        /// Whether the borrower is in bankruptcy
        is_in_bankruptcy: Option<bool> => Boolean,
        /// Whether this is a joint loan
        co_borrower_application: Option<bool> => Boolean,
        /// Origination date
        origination_date: Option<DateValue> => Date,
        /// Days past due
        days_past_due: Option<i64> => Integer,
        /// Next payment due date
        next_payment_due_date: Option<DateValue> => Date,
        /// When the account took ownership
        ownership_start_date: Option<DateValue> => Date,
    }
}
