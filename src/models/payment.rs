//! Loan payment models.
//!
//! The payments API sends amounts as JSON strings and timestamps in ISO
//! form; both are normalized by the deserializer.

use crate::decode::{Amount, Timestamp};
use crate::define_record;

define_record! {
    /// A single payment transaction on a loan.
    pub struct Payment as PAYMENT {
        /// Loan the payment applies to
        loan_number: i64 => Integer,
        /// Transaction identifier
        transaction_id: i64 => Integer,
        /// When the funds become available
        funds_available_date: Option<Timestamp> => DateTime,
        /// When the funds are disbursed to investors
        investor_disbursement_date: Option<Timestamp> => DateTime,
        /// Effective date of the transaction
        transaction_effective_date: Option<Timestamp> => DateTime,
        /// Effective date on the account
        account_effective_date: Option<Timestamp> => DateTime,
        /// Payment method code, e.g. "ACH"
        payment_transaction_code: Option<String> => Str,
        /// Payment status, e.g. "Success"
        payment_status: Option<String> => Str,
        /// Match-back identifier
        match_back_id: Option<String> => Str,
        /// Match-back identifier of the payment this one reverses
        prior_match_back_id: Option<String> => Str,
        /// Cash flow type, e.g. "Payment"
        loan_payment_cashflow_type: Option<String> => Str,
        /// Total payment
        payment_amount: Option<Amount> => Number,
        /// Principal portion
        principal_amount: Option<Amount> => Number,
        /// Interest portion
        interest_amount: Option<Amount> => Number,
        /// Origination interest portion
        origination_interest_amount: Option<Amount> => Number,
        /// Late fee portion
        late_fee_amount: Option<Amount> => Number,
        /// Servicing fee portion
        service_fee_amount: Option<Amount> => Number,
        /// Collection fee portion
        collection_fee_amount: Option<Amount> => Number,
        /// Reward portion
        gl_reward_amount: Option<Amount> => Number,
        /// NSF fee portion
        nsf_fee_amount: Option<Amount> => Number,
        /// Days past due before the payment
        pre_days_past_due: Option<i64> => Integer,
        /// Days past due after the payment
        post_days_past_due: Option<i64> => Integer,
        /// Principal balance after the payment
        resulting_principal_balance: Option<Amount> => Number,
    }
}
