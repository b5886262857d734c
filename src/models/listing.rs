//! Listing models returned by the listings search.

use crate::decode::{Amount, EnumValue, Timestamp};
use crate::define_record;
use crate::models::{
    BorrowerState, EmploymentStatus, FicoScore, IncomeRange, ListingCategory, ListingStatus,
    Occupation, ProsperRating, BORROWER_STATE, EMPLOYMENT_STATUS, FICO_SCORE, INCOME_RANGE,
    LISTING_CATEGORY, LISTING_STATUS, OCCUPATION, PROSPER_RATING,
};

define_record! {
    /// A loan listing open to (or formerly open to) investors.
    pub struct Listing as LISTING {
        /// Listing identifier
        listing_number: i64 => Integer,
        /// TransUnion credit attributes captured for the listing
        credit_bureau_values_transunion_indexed: Option<CreditBureauValues> => Record(CREDIT_BUREAU_VALUES),
        /// When the listing opened
        listing_start_date: Option<Timestamp> => DateTime,
        /// When the listing closed
        listing_end_date: Option<Timestamp> => DateTime,
        /// When the listing was created
        listing_creation_date: Option<Timestamp> => DateTime,
        /// When the resulting loan originated
        loan_origination_date: Option<Timestamp> => DateTime,
        /// Last modification time
        last_updated_date: Option<Timestamp> => DateTime,
        /// Whole-loan window start
        whole_loan_start_date: Option<Timestamp> => DateTime,
        /// Whole-loan window end
        whole_loan_end_date: Option<Timestamp> => DateTime,
        /// Historical return for the listing's cohort
        historical_return: Option<Amount> => Number,
        /// 10th percentile historical return
        historical_return_10th_pctl: Option<Amount> => Number,
        /// 90th percentile historical return
        historical_return_90th_pctl: Option<Amount> => Number,
        /// Employment status
        employment_status_description: Option<EnumValue<EmploymentStatus>> => Enum(EMPLOYMENT_STATUS),
        /// Occupation
        occupation: Option<EnumValue<Occupation>> => Enum(OCCUPATION),
        /// Months with current employer
        months_employed: Option<Amount> => Number,
        /// Whether the borrower has a mortgage
        has_mortgage: Option<bool> => Boolean,
        /// Whether this is a joint application
        co_borrower_application: Option<bool> => Boolean,
        /// Investment type, e.g. "Fractional"
        investment_type_description: Option<String> => Str,
        /// Investment type id
        investment_typeid: Option<i64> => Integer,
        /// Investment product id
        investment_product_id: Option<i64> => Integer,
        /// Whether the account has invested in this listing
        invested: Option<bool> => Boolean,
        /// Whether the listing accepts bids
        biddable: Option<bool> => Boolean,
        /// Yield to the lender
        lender_yield: Option<Amount> => Number,
        /// Borrower's interest rate
        borrower_rate: Option<Amount> => Number,
        /// Borrower's APR
        borrower_apr: Option<Amount> => Number,
        /// Term in months
        listing_term: Option<i64> => Integer,
        /// Monthly payment
        listing_monthly_payment: Option<Amount> => Number,
        /// Prosper score (1-11)
        prosper_score: Option<i64> => Integer,
        /// Prosper rating
        prosper_rating: Option<EnumValue<ProsperRating>> => Enum(PROSPER_RATING),
        /// Listing purpose
        listing_category_id: Option<EnumValue<ListingCategory>> => Enum(LISTING_CATEGORY),
        /// Listing title
        listing_title: Option<String> => Str,
        /// Income range
        income_range: Option<EnumValue<IncomeRange>> => Enum(INCOME_RANGE),
        /// Income range label
        income_range_description: Option<String> => Str,
        /// Stated monthly income
        stated_monthly_income: Option<Amount> => Number,
        /// Combined stated monthly income for joint applications
        combined_stated_monthly_income: Option<Amount> => Number,
        /// Whether income is verifiable
        income_verifiable: Option<bool> => Boolean,
        /// Debt-to-income ratio including this loan
        dti_wprosper_loan: Option<Amount> => Number,
        /// Combined debt-to-income ratio for joint applications
        combined_dti_wprosper_loan: Option<Amount> => Number,
        /// Estimated monthly housing expense
        estimated_monthly_housing_expense: Option<Amount> => Number,
        /// Borrower's state
        borrower_state: Option<EnumValue<BorrowerState>> => Enum(BORROWER_STATE),
        /// Number of prior Prosper loans
        prior_prosper_loans: Option<i64> => Integer,
        /// Active prior Prosper loans
        prior_prosper_loans_active: Option<i64> => Integer,
        /// Late cycles on prior loans
        prior_prosper_loans_late_cycles: Option<i64> => Integer,
        /// Payments a month or more late on prior loans
        prior_prosper_loans_late_payments_one_month_plus: Option<i64> => Integer,
        /// On-time payments on prior loans
        prior_prosper_loans_ontime_payments: Option<i64> => Integer,
        /// Cycles billed on prior loans
        prior_prosper_loans_cycles_billed: Option<i64> => Integer,
        /// Balance outstanding on prior loans
        prior_prosper_loans_balance_outstanding: Option<Amount> => Number,
        /// Principal borrowed on prior loans
        prior_prosper_loans_principal_borrowed: Option<Amount> => Number,
        /// Principal outstanding on prior loans
        prior_prosper_loans_principal_outstanding: Option<Amount> => Number,
        /// Lender indicator
        lender_indicator: Option<i64> => Integer,
        /// Acquisition channel code
        channel_code: Option<String> => Str,
        /// Participation amount
        amount_participation: Option<Amount> => Number,
        /// Loan number once originated
        loan_number: Option<i64> => Integer,
        /// Bureau used for the credit decision
        decision_bureau: Option<String> => Str,
        /// Borrower member key
        member_key: Option<String> => Str,
        /// Listing status
        listing_status: Option<EnumValue<ListingStatus>> => Enum(LISTING_STATUS),
        /// Listing status label
        listing_status_reason: Option<String> => Str,
        /// Verification stage
        verification_stage: Option<i64> => Integer,
        /// Requested amount
        listing_amount: Option<Amount> => Number,
        /// Amount funded so far
        amount_funded: Option<Amount> => Number,
        /// Amount still to be funded
        amount_remaining: Option<Amount> => Number,
        /// Fraction funded
        percent_funded: Option<Amount> => Number,
        /// Whether partial funding is allowed
        partial_funding_indicator: Option<bool> => Boolean,
        /// Fraction required for partial funding
        funding_threshold: Option<Amount> => Number,
    }
}

define_record! {
    /// TransUnion credit attributes attached to a listing.
    ///
    /// Negative values are bureau sentinel codes (e.g. -4 for "not
    /// applicable"), not real measurements.
    pub struct CreditBureauValues as CREDIT_BUREAU_VALUES {
        /// When the credit report was pulled
        credit_report_date: Option<Timestamp> => DateTime,
        /// FICO band
        fico_score: Option<EnumValue<FicoScore>> => Enum(FICO_SCORE),
        /// Open accounts
        at02s_open_accounts: Option<Amount> => Number,
        /// Credit lines
        at01s_credit_lines: Option<Amount> => Number,
        /// Current credit lines
        at03s_current_credit_lines: Option<Amount> => Number,
        /// Age of oldest trade, months
        at20s_oldest_trade_open_date: Option<Amount> => Number,
        /// Amount delinquent
        at57s_amount_delinquent: Option<Amount> => Number,
        /// Bankcard utilization, percent
        bc34s_bankcard_utilization: Option<Amount> => Number,
        /// Accounts ever 30+ days past due
        g041s_accounts_30_or_more_days_past_due_ever: Option<Amount> => Number,
        /// Public records
        g093s_number_of_public_records: Option<Amount> => Number,
        /// Public record bankruptcies
        g094s_number_of_public_record_bankruptcies: Option<Amount> => Number,
        /// Months since most recent public record
        g095s_months_since_most_recent_public_record: Option<Amount> => Number,
        /// Public records in the last 24 months
        g099s_public_records_last_24_months: Option<Amount> => Number,
        /// Months since most recent inquiry
        g102s_months_since_most_recent_inquiry: Option<Amount> => Number,
        /// Delinquent accounts
        g218b_number_of_delinquent_accounts: Option<Amount> => Number,
        /// Inquiries in the last 6 months
        g980s_inquiries_in_the_last_6_months: Option<Amount> => Number,
        /// Revolving balance
        re101s_revolving_balance: Option<Amount> => Number,
        /// Age of oldest revolving account, months
        re20s_age_of_oldest_revolving_account_in_months: Option<Amount> => Number,
        /// Balance owed on all revolving accounts
        re33s_balance_owed_on_all_revolving_accounts: Option<Amount> => Number,
        /// Months since most recent public record bankruptcy
        s207s_months_since_most_recent_public_record_bankruptcy: Option<Amount> => Number,
    }
}
