//! Request parameters for the list and search endpoints.
//!
//! Requests are plain structs with public fields and sensible defaults;
//! use struct update syntax to set only what you need:
//!
//! ```
//! use prosper_rs::models::{Bounds, ProsperRating, SearchListingsRequest};
//! use rust_decimal::Decimal;
//!
//! let request = SearchListingsRequest {
//!     prosper_rating: vec![ProsperRating::AA, ProsperRating::A],
//!     lender_yield: Bounds::at_least(Decimal::new(8, 2)),
//!     ..Default::default()
//! };
//! let query = request.to_query();
//! assert!(query.contains(&("prosper_rating".to_string(), "AA,A".to_string())));
//! assert!(query.contains(&("lender_yield_min".to_string(), "0.08".to_string())));
//! ```

use std::fmt::Display;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    BorrowerState, EmploymentStatus, FicoScore, IncomeRange, ListingCategory, ListingStatus,
    Occupation, ProsperRating, SortDirection,
};

/// An inclusive range filter, sent as `<name>_min` / `<name>_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    /// Lower bound
    pub min: Option<T>,
    /// Upper bound
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T> Bounds<T> {
    /// Both bounds.
    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Lower bound only.
    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Upper bound only.
    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }
}

/// Query pairs for a GET request. Unset values are omitted.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    fn value(&mut self, key: &str, value: impl Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    fn opt<T: Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.value(key, value);
        }
    }

    fn flag(&mut self, key: &str, value: Option<bool>) {
        self.opt(key, value.map(|v| if v { "true" } else { "false" }));
    }

    fn list<T: Display>(&mut self, key: &str, values: &[T]) {
        if !values.is_empty() {
            let joined = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
            self.value(key, joined);
        }
    }

    fn range<T: Display>(&mut self, name: &str, bounds: &Bounds<T>) {
        self.opt(&format!("{}_min", name), bounds.min.as_ref());
        self.opt(&format!("{}_max", name), bounds.max.as_ref());
    }

    fn sort(&mut self, field: &str, direction: SortDirection) {
        self.value("sort_by", format!("{} {}", field, direction));
    }

    pub(crate) fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// A request that can be paged by `offset` and `limit`.
pub trait PagedRequest: Clone + Send + Sync + 'static {
    /// A copy of this request for one page.
    fn page(&self, offset: u32, limit: u32) -> Self;

    /// The request as query pairs.
    fn to_query(&self) -> Vec<(String, String)>;
}

/// Search filters, sort and paging for the listings search.
///
/// Dates are sent as `YYYY-MM-DD`, booleans as `true`/`false`, and
/// multi-value filters comma-joined.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchListingsRequest {
    /// Field to sort by
    pub sort_by: String,
    /// Sort direction
    pub sort_dir: SortDirection,
    /// Results to skip
    pub offset: Option<u32>,
    /// Maximum results to return
    pub limit: Option<u32>,
    /// Only listings open for bids (`true` when unset)
    pub biddable: Option<bool>,
    /// Only listings the account has (or has not) invested in
    pub invested: Option<bool>,
    /// Amount funded
    pub amount_funded: Bounds<Decimal>,
    /// Amount remaining
    pub amount_remaining: Bounds<Decimal>,
    /// Borrower rate
    pub borrower_rate: Bounds<Decimal>,
    /// Borrower states
    pub borrower_state: Vec<BorrowerState>,
    /// Debt-to-income ratio including this loan
    pub dti_wprosper_loan: Bounds<Decimal>,
    /// Employment statuses
    pub employment_status_description: Vec<EmploymentStatus>,
    /// Estimated monthly housing expense
    pub estimated_monthly_housing_expense: Bounds<Decimal>,
    /// FICO bands
    pub fico_score: Vec<FicoScore>,
    /// Whether the borrower has a mortgage
    pub has_mortgage: Option<bool>,
    /// Income ranges
    pub income_range: Vec<IncomeRange>,
    /// Lender yield
    pub lender_yield: Bounds<Decimal>,
    /// Listing amount
    pub listing_amount: Bounds<Decimal>,
    /// Listing categories
    pub listing_category_id: Vec<ListingCategory>,
    /// Listing creation date
    pub listing_creation_date: Bounds<NaiveDate>,
    /// Listing end date
    pub listing_end_date: Bounds<NaiveDate>,
    /// Monthly payment
    pub listing_monthly_payment: Bounds<Decimal>,
    /// Specific listings
    pub listing_number: Vec<i64>,
    /// Listing start date
    pub listing_start_date: Bounds<NaiveDate>,
    /// Listing statuses
    pub listing_status: Vec<ListingStatus>,
    /// Terms in months
    pub listing_term: Vec<i64>,
    /// Loan origination date
    pub loan_origination_date: Bounds<NaiveDate>,
    /// Months employed
    pub months_employed: Bounds<Decimal>,
    /// Occupations
    pub occupation: Vec<Occupation>,
    /// Whether partial funding is allowed
    pub partial_funding_indicator: Option<bool>,
    /// Fraction funded
    pub percent_funded: Bounds<Decimal>,
    /// Prior Prosper loans
    pub prior_prosper_loans: Bounds<Decimal>,
    /// Active prior Prosper loans
    pub prior_prosper_loans_active: Bounds<Decimal>,
    /// Balance outstanding on prior loans
    pub prior_prosper_loans_balance_outstanding: Bounds<Decimal>,
    /// Cycles billed on prior loans
    pub prior_prosper_loans_cycles_billed: Bounds<Decimal>,
    /// Late cycles on prior loans
    pub prior_prosper_loans_late_cycles: Bounds<Decimal>,
    /// Payments a month or more late on prior loans
    pub prior_prosper_loans_late_payments_one_month_plus: Bounds<Decimal>,
    /// On-time payments on prior loans
    pub prior_prosper_loans_ontime_payments: Bounds<Decimal>,
    /// Principal borrowed on prior loans
    pub prior_prosper_loans_principal_borrowed: Bounds<Decimal>,
    /// Principal outstanding on prior loans
    pub prior_prosper_loans_principal_outstanding: Bounds<Decimal>,
    /// Prosper ratings (all rated grades by default)
    pub prosper_rating: Vec<ProsperRating>,
    /// Prosper score
    pub prosper_score: Bounds<Decimal>,
    /// Stated monthly income
    pub stated_monthly_income: Bounds<Decimal>,
    /// Verification stage
    pub verification_stage: Bounds<Decimal>,
    /// Whole-loan window end
    pub whole_loan_end_date: Bounds<NaiveDate>,
    /// Whole-loan window start
    pub whole_loan_start_date: Bounds<NaiveDate>,
    /// Whether this is a joint application
    pub co_borrower_application: Option<bool>,
    /// Combined debt-to-income ratio
    pub combined_dti_wprosper_loan: Bounds<Decimal>,
    /// Combined stated monthly income
    pub combined_stated_monthly_income: Bounds<Decimal>,
}

impl Default for SearchListingsRequest {
    fn default() -> Self {
        Self {
            sort_by: "lender_yield".to_string(),
            sort_dir: SortDirection::Desc,
            offset: None,
            limit: None,
            biddable: None,
            invested: None,
            amount_funded: Bounds::default(),
            amount_remaining: Bounds::default(),
            borrower_rate: Bounds::default(),
            borrower_state: Vec::new(),
            dti_wprosper_loan: Bounds::default(),
            employment_status_description: Vec::new(),
            estimated_monthly_housing_expense: Bounds::default(),
            fico_score: Vec::new(),
            has_mortgage: None,
            income_range: Vec::new(),
            lender_yield: Bounds::default(),
            listing_amount: Bounds::default(),
            listing_category_id: Vec::new(),
            listing_creation_date: Bounds::default(),
            listing_end_date: Bounds::default(),
            listing_monthly_payment: Bounds::default(),
            listing_number: Vec::new(),
            listing_start_date: Bounds::default(),
            listing_status: Vec::new(),
            listing_term: Vec::new(),
            loan_origination_date: Bounds::default(),
            months_employed: Bounds::default(),
            occupation: Vec::new(),
            partial_funding_indicator: None,
            percent_funded: Bounds::default(),
            prior_prosper_loans: Bounds::default(),
            prior_prosper_loans_active: Bounds::default(),
            prior_prosper_loans_balance_outstanding: Bounds::default(),
            prior_prosper_loans_cycles_billed: Bounds::default(),
            prior_prosper_loans_late_cycles: Bounds::default(),
            prior_prosper_loans_late_payments_one_month_plus: Bounds::default(),
            prior_prosper_loans_ontime_payments: Bounds::default(),
            prior_prosper_loans_principal_borrowed: Bounds::default(),
            prior_prosper_loans_principal_outstanding: Bounds::default(),
            prosper_rating: ProsperRating::SEARCHABLE.to_vec(),
            prosper_score: Bounds::default(),
            stated_monthly_income: Bounds::default(),
            verification_stage: Bounds::default(),
            whole_loan_end_date: Bounds::default(),
            whole_loan_start_date: Bounds::default(),
            co_borrower_application: None,
            combined_dti_wprosper_loan: Bounds::default(),
            combined_stated_monthly_income: Bounds::default(),
        }
    }
}

impl SearchListingsRequest {
    /// The request as query pairs.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut q = Query::default();
        q.sort(&self.sort_by, self.sort_dir);
        q.opt("offset", self.offset);
        q.opt("limit", self.limit);
        q.flag("biddable", Some(self.biddable.unwrap_or(true)));
        q.flag("invested", self.invested);
        q.range("amount_funded", &self.amount_funded);
        q.range("amount_remaining", &self.amount_remaining);
        q.range("borrower_rate", &self.borrower_rate);
        q.list("borrower_state", &self.borrower_state);
        q.range("dti_wprosper_loan", &self.dti_wprosper_loan);
        q.list("employment_status_description", &self.employment_status_description);
        q.range("estimated_monthly_housing_expense", &self.estimated_monthly_housing_expense);
        q.list("fico_score", &self.fico_score);
        q.flag("has_mortgage", self.has_mortgage);
        q.list("income_range", &self.income_range);
        q.range("lender_yield", &self.lender_yield);
        q.range("listing_amount", &self.listing_amount);
        q.list("listing_category_id", &self.listing_category_id);
        q.range("listing_creation_date", &self.listing_creation_date);
        q.range("listing_end_date", &self.listing_end_date);
        q.range("listing_monthly_payment", &self.listing_monthly_payment);
        q.list("listing_number", &self.listing_number);
        q.range("listing_start_date", &self.listing_start_date);
        q.list("listing_status", &self.listing_status);
        q.list("listing_term", &self.listing_term);
        q.range("loan_origination_date", &self.loan_origination_date);
        q.range("months_employed", &self.months_employed);
        q.list("occupation", &self.occupation);
        q.flag("partial_funding_indicator", self.partial_funding_indicator);
        q.range("percent_funded", &self.percent_funded);
        q.range("prior_prosper_loans", &self.prior_prosper_loans);
        q.range("prior_prosper_loans_active", &self.prior_prosper_loans_active);
        q.range(
            "prior_prosper_loans_balance_outstanding",
            &self.prior_prosper_loans_balance_outstanding,
        );
        q.range("prior_prosper_loans_cycles_billed", &self.prior_prosper_loans_cycles_billed);
        q.range("prior_prosper_loans_late_cycles", &self.prior_prosper_loans_late_cycles);
        q.range(
            "prior_prosper_loans_late_payments_one_month_plus",
            &self.prior_prosper_loans_late_payments_one_month_plus,
        );
        q.range("prior_prosper_loans_ontime_payments", &self.prior_prosper_loans_ontime_payments);
        q.range(
            "prior_prosper_loans_principal_borrowed",
            &self.prior_prosper_loans_principal_borrowed,
        );
        q.range(
            "prior_prosper_loans_principal_outstanding",
            &self.prior_prosper_loans_principal_outstanding,
        );
        q.list("prosper_rating", &self.prosper_rating);
        q.range("prosper_score", &self.prosper_score);
        q.range("stated_monthly_income", &self.stated_monthly_income);
        q.range("verification_stage", &self.verification_stage);
        q.range("whole_loan_end_date", &self.whole_loan_end_date);
        q.range("whole_loan_start_date", &self.whole_loan_start_date);
        q.flag("co_borrower_application", self.co_borrower_application);
        q.range("combined_dti_wprosper_loan", &self.combined_dti_wprosper_loan);
        q.range("combined_stated_monthly_income", &self.combined_stated_monthly_income);
        q.into_pairs()
    }
}

impl PagedRequest for SearchListingsRequest {
    fn page(&self, offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..self.clone()
        }
    }

    fn to_query(&self) -> Vec<(String, String)> {
        SearchListingsRequest::to_query(self)
    }
}

/// Sort and paging for the notes, orders and loans lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    /// Field to sort by
    pub sort_by: String,
    /// Sort direction
    pub sort_dir: SortDirection,
    /// Maximum results to return
    pub limit: Option<u32>,
    /// Results to skip
    pub offset: Option<u32>,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            sort_by: "prosper_rating".to_string(),
            sort_dir: SortDirection::Desc,
            limit: None,
            offset: None,
        }
    }
}

impl PagedRequest for ListRequest {
    fn page(&self, offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..self.clone()
        }
    }

    fn to_query(&self) -> Vec<(String, String)> {
        let mut q = Query::default();
        q.sort(&self.sort_by, self.sort_dir);
        q.opt("limit", self.limit);
        q.opt("offset", self.offset);
        q.into_pairs()
    }
}

/// Parameters for listing notes.
pub type ListNotesRequest = ListRequest;
/// Parameters for listing orders.
pub type ListOrdersRequest = ListRequest;
/// Parameters for listing loans.
pub type ListLoansRequest = ListRequest;

/// Filters and paging for the loan payments list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPaymentsRequest {
    /// Loans to list payments for
    pub loan_number: Vec<i64>,
    /// Only payments effective on this date
    pub transaction_effective_date: Option<NaiveDate>,
    /// Maximum results to return
    pub limit: Option<u32>,
    /// Results to skip
    pub offset: Option<u32>,
}

impl PagedRequest for ListPaymentsRequest {
    fn page(&self, offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..self.clone()
        }
    }

    fn to_query(&self) -> Vec<(String, String)> {
        let mut q = Query::default();
        q.list("loan_number", &self.loan_number);
        q.opt("transaction_effective_date", self.transaction_effective_date);
        q.opt("limit", self.limit);
        q.opt("offset", self.offset);
        q.into_pairs()
    }
}
