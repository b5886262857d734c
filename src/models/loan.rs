//! Loan models.

use crate::decode::{Amount, DateValue, EnumValue};
use crate::define_record;
use crate::models::{ProsperRating, PROSPER_RATING};

define_record! {
    /// A whole loan the account has invested in.
    pub struct Loan as LOAN {
        /// Loan identifier
        loan_number: i64 => Integer,
        /// Loan amount
        amount_borrowed: Option<Amount> => Number,
        /// Borrower's interest rate
        borrower_rate: Option<Amount> => Number,
        /// Prosper rating
        prosper_rating: Option<EnumValue<ProsperRating>> => Enum(PROSPER_RATING),
        /// Term in months
        term: Option<i64> => Integer,
        /// Age in months
        age_in_months: Option<i64> => Integer,
        /// Origination date
        origination_date: Option<DateValue> => Date,
        /// Days past due
        days_past_due: Option<i64> => Integer,
        /// Outstanding principal
        principal_balance: Option<Amount> => Number,
        /// Servicing fees paid (negative)
        service_fees_paid: Option<Amount> => Number,
        /// Principal repaid
        principal_paid: Option<Amount> => Number,
        /// Interest paid
        interest_paid: Option<Amount> => Number,
        /// Prosper fees paid
        prosper_fees_paid: Option<Amount> => Number,
        /// Late fees paid
        late_fees_paid: Option<Amount> => Number,
        /// Collection fees paid
        collection_fees_paid: Option<Amount> => Number,
        /// Debt sale proceeds received
        debt_sale_proceeds_received: Option<Amount> => Number,
        /// Loan status code
        loan_status: Option<i64> => Integer,
        /// Loan status label
        loan_status_description: Option<String> => Str,
        /// Default reason code
        loan_default_reason: Option<i64> => Integer,
        /// Default reason label
        loan_default_reason_description: Option<String> => Str,
        /// Next payment due date
        next_payment_due_date: Option<DateValue> => Date,
        /// Next payment amount due
        next_payment_due_amount: Option<Amount> => Number,
    }
}
