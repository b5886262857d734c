//! Enumeration types for the Prosper API.
//!
//! Every enum is declared with [`wire_enum!`](crate::wire_enum), so it
//! carries a schema the deserializer uses to resolve raw wire values, and
//! it displays (and serializes) as its wire value. That lets enums be used
//! directly as search filter values.

use crate::wire_enum;

wire_enum! {
    /// Prosper risk rating of a loan.
    #[allow(clippy::upper_case_acronyms)]
    pub enum ProsperRating as PROSPER_RATING: Str {
        /// Not rated
        NR = "NR",
        /// Not applicable (loans originated before ratings existed)
        NotApplicable = "N/A",
        /// High risk
        HR = "HR",
        /// E
        E = "E",
        /// D
        D = "D",
        /// C
        C = "C",
        /// B
        B = "B",
        /// A
        A = "A",
        /// Lowest risk
        AA = "AA",
    }
}

impl ProsperRating {
    /// Ratings that listing searches include by default.
    pub const SEARCHABLE: &'static [ProsperRating] = &[
        ProsperRating::AA,
        ProsperRating::A,
        ProsperRating::B,
        ProsperRating::C,
        ProsperRating::D,
        ProsperRating::E,
        ProsperRating::HR,
    ];
}

wire_enum! {
    /// Borrower's stated income range.
    pub enum IncomeRange as INCOME_RANGE: Int {
        /// Not displayed
        NotDisplayed = 0,
        /// $0
        ZeroDollars = 1,
        /// $1 - $24,999
        From1To24999 = 2,
        /// $25,000 - $49,999
        From25000To49999 = 3,
        /// $50,000 - $74,999
        From50000To74999 = 4,
        /// $75,000 - $99,999
        From75000To99999 = 5,
        /// $100,000+
        Over100000 = 6,
        /// Not employed
        NotEmployed = 7,
    }
}

wire_enum! {
    /// Purpose of a listing.
    pub enum ListingCategory as LISTING_CATEGORY: Int {
        /// Debt consolidation
        DebtConsolidation = 1,
        /// Home improvement
        HomeImprovement = 2,
        /// Business
        Business = 3,
        /// Personal loan
        PersonalLoan = 4,
        /// Student use
        StudentUse = 5,
        /// Auto, motorcycle, RV or boat
        AutoMotorcycleRvBoat = 6,
        /// Other
        Other = 7,
        /// Baby and adoption
        BabyAndAdoption = 8,
        /// Boat
        Boat = 9,
        /// Cosmetic procedures
        CosmeticProcedures = 10,
        /// Engagement ring financing
        EngagementRingFinancing = 11,
        /// Green loans
        GreenLoans = 12,
        /// Household expenses
        HouseholdExpenses = 13,
        /// Large purchase
        LargePurchase = 14,
        /// Medical or dental
        MedicalDental = 15,
        /// Motorcycle
        Motorcycle = 16,
        /// RV
        Rv = 17,
        /// Taxes
        Taxes = 18,
        /// Vacation
        Vacation = 19,
        /// Wedding loans
        WeddingLoans = 20,
        /// Special occasion
        SpecialOccasion = 21,
    }
}

wire_enum! {
    /// Lifecycle status of a listing.
    pub enum ListingStatus as LISTING_STATUS: Int {
        /// Open for bids
        Active = 2,
        /// Withdrawn by the borrower
        Withdrawn = 3,
        /// Expired without funding
        Expired = 4,
        /// Funded
        Completed = 5,
        /// Cancelled
        Cancelled = 6,
        /// Awaiting review
        PendingReview = 7,
    }
}

impl ListingStatus {
    /// Returns `true` if the listing can no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ListingStatus::Active | ListingStatus::PendingReview)
    }
}

wire_enum! {
    /// Borrower's stated occupation.
    pub enum Occupation as OCCUPATION: Str {
        /// Accountant / CPA
        AccountantCpa = "Accountant / CPA",
        /// Administrative assistant
        AdministrativeAssistant = "Administrative Assistant",
        /// Analyst
        Analyst = "Analyst",
        /// Architect
        Architect = "Architect",
        /// Attorney
        Attorney = "Attorney",
        /// Biologist
        Biologist = "Biologist",
        /// Bus driver
        BusDriver = "Bus Driver",
        /// Car dealer
        CarDealer = "Car Dealer",
        /// Chemist
        Chemist = "Chemist",
        /// Civil service
        CivilService = "Civil Service",
        /// Clergy
        Clergy = "Clergy",
        /// Clerical
        Clerical = "Clerical",
        /// Computer programmer
        ComputerProgrammer = "Computer Programmer",
        /// Construction
        Construction = "Construction",
        /// Dentist
        Dentist = "Dentist",
        /// Doctor
        Doctor = "Doctor",
        /// Chemical engineer
        EngineerChemical = "Engineer – Chemical",
        /// Electrical engineer
        EngineerElectrical = "Engineer – Electrical",
        /// Mechanical engineer
        EngineerMechanical = "Engineer – Mechanical",
        /// Executive
        Executive = "Executive",
        /// Fireman
        Fireman = "Fireman",
        /// Flight attendant
        FlightAttendant = "Flight Attendant",
        /// Food service
        FoodService = "Food Service",
        /// Food service management
        FoodServiceManagement = "Food Service Management",
        /// Homemaker
        Homemaker = "Homemaker",
        /// Investor
        Investor = "Investor",
        /// Judge
        Judge = "Judge",
        /// Laborer
        Laborer = "Laborer",
        /// Landscaping
        Landscaping = "Landscaping",
        /// Medical technician
        MedicalTechnician = "Medical Technician",
        /// Enlisted military
        MilitaryEnlisted = "Military Enlisted",
        /// Military officer
        MilitaryOfficer = "Military Officer",
        /// Nurse (LPN)
        NurseLpn = "Nurse (LPN)",
        /// Nurse (RN)
        NurseRn = "Nurse (RN)",
        /// Nurse's aide
        NursesAide = "Nurse’s Aide",
        /// Other
        Other = "Other",
        /// Pharmacist
        Pharmacist = "Pharmacist",
        /// Private or commercial pilot
        Pilot = "Pilot Private / Commercial",
        /// Police or correction officer
        PoliceCorrectionOfficer = "Police Officer / Correction Officer",
        /// Postal service
        PostalService = "Postal Service",
        /// Principal
        Principal = "Principal",
        /// Professional
        Professional = "Professional",
        /// Professor
        Professor = "Professor",
        /// Psychologist
        Psychologist = "Psychologist",
        /// Realtor
        Realtor = "Realtor",
        /// Religious
        Religious = "Religious",
        /// Retail management
        RetailManagement = "Retail Management",
        /// Sales on commission
        SalesCommission = "Sales – Commission",
        /// Retail sales
        SalesRetail = "Sales – Retail",
        /// Scientist
        Scientist = "Scientist",
        /// Skilled labor
        SkilledLabor = "Skilled Labor",
        /// Social worker
        SocialWorker = "Social Worker",
        /// College freshman
        StudentCollegeFreshman = "Student – College Freshman",
        /// College sophomore
        StudentCollegeSophomore = "Student – College Sophomore",
        /// College junior
        StudentCollegeJunior = "Student – College Junior",
        /// College senior
        StudentCollegeSenior = "Student – College Senior",
        /// Graduate student
        StudentCollegeGraduateStudent = "Student – College Graduate Student",
        /// Community college student
        StudentCommunityCollege = "Student – Community College",
        /// Technical school student
        StudentTechnicalSchool = "Student – Technical School",
        /// Teacher
        Teacher = "Teacher",
        /// Teacher's aide
        TeachersAide = "Teacher’s Aide",
        /// Carpenter
        TradesmanCarpenter = "Tradesman – Carpenter",
        /// Electrician
        TradesmanElectrician = "Tradesman – Electrician",
        /// Mechanic
        TradesmanMechanic = "Tradesman – Mechanic",
        /// Plumber
        TradesmanPlumber = "Tradesman – Plumber",
        /// Truck driver
        TruckDriver = "Truck Driver",
        /// Waiter / waitress
        WaiterWaitress = "Waiter / Waitress",
    }
}

wire_enum! {
    /// Borrower's employment status.
    pub enum EmploymentStatus as EMPLOYMENT_STATUS: Str {
        /// Employed
        Employed = "Employed",
        /// Self-employed
        SelfEmployed = "Self-employed",
        /// Retired
        Retired = "Retired",
    }
}

wire_enum! {
    /// FICO score band.
    pub enum FicoScore as FICO_SCORE: Str {
        /// Below 600
        Below600 = "<600",
        /// 600-619
        From600To619 = "600-619",
        /// 620-639
        From620To639 = "620-639",
        /// 640-659
        From640To659 = "640-659",
        /// 660-679
        From660To679 = "660-679",
        /// 680-699
        From680To699 = "680-699",
        /// 700-719
        From700To719 = "700-719",
        /// 720-739
        From720To739 = "720-739",
        /// 740-759
        From740To759 = "740-759",
        /// 760-779
        From760To779 = "760-779",
        /// 780-799
        From780To799 = "780-799",
        /// 800-819
        From800To819 = "800-819",
        /// 820-850
        From820To850 = "820-850",
    }
}

wire_enum! {
    /// Borrower's state of residence.
    #[allow(clippy::upper_case_acronyms)]
    pub enum BorrowerState as BORROWER_STATE: Str {
        /// Alaska
        AK = "AK",
        /// Alabama
        AL = "AL",
        /// Arkansas
        AR = "AR",
        /// Arizona
        AZ = "AZ",
        /// California
        CA = "CA",
        /// Colorado
        CO = "CO",
        /// Connecticut
        CT = "CT",
        /// District of Columbia
        DC = "DC",
        /// Delaware
        DE = "DE",
        /// Florida
        FL = "FL",
        /// Georgia
        GA = "GA",
        /// Hawaii
        HI = "HI",
        /// Iowa
        IA = "IA",
        /// Idaho
        ID = "ID",
        /// Illinois
        IL = "IL",
        /// Indiana
        IN = "IN",
        /// Kansas
        KS = "KS",
        /// Kentucky
        KY = "KY",
        /// Louisiana
        LA = "LA",
        /// Massachusetts
        MA = "MA",
        /// Maryland
        MD = "MD",
        /// Maine
        ME = "ME",
        /// Michigan
        MI = "MI",
        /// Minnesota
        MN = "MN",
        /// Missouri
        MO = "MO",
        /// Mississippi
        MS = "MS",
        /// Montana
        MT = "MT",
        /// North Carolina
        NC = "NC",
        /// North Dakota
        ND = "ND",
        /// Nebraska
        NE = "NE",
        /// New Hampshire
        NH = "NH",
        /// New Jersey
        NJ = "NJ",
        /// New Mexico
        NM = "NM",
        /// Nevada
        NV = "NV",
        /// New York
        NY = "NY",
        /// Ohio
        OH = "OH",
        /// Oklahoma
        OK = "OK",
        /// Oregon
        OR = "OR",
        /// Pennsylvania
        PA = "PA",
        /// Rhode Island
        RI = "RI",
        /// South Carolina
        SC = "SC",
        /// South Dakota
        SD = "SD",
        /// Tennessee
        TN = "TN",
        /// Texas
        TX = "TX",
        /// Utah
        UT = "UT",
        /// Virginia
        VA = "VA",
        /// Vermont
        VT = "VT",
        /// Washington
        WA = "WA",
        /// Wisconsin
        WI = "WI",
        /// West Virginia
        WV = "WV",
        /// Wyoming
        WY = "WY",
    }
}

wire_enum! {
    /// Status of a single bid within an order.
    pub enum BidStatus as BID_STATUS: Str {
        /// Waiting to be processed
        Pending = "PENDING",
        /// Invested in the listing
        Invested = "INVESTED",
        /// The listing expired first
        Expired = "EXPIRED",
        /// Cancelled
        Cancelled = "CANCELLED",
    }
}

wire_enum! {
    /// Outcome of a processed bid.
    pub enum BidResult as BID_RESULT: Str {
        /// No result yet
        NoResult = "NONE",
        /// Fully placed
        BidSucceeded = "BID_SUCCEEDED",
        /// Not placed
        BidFailed = "BID_FAILED",
        /// Placed for less than the requested amount
        PartialBidSucceeded = "PARTIAL_BID_SUCCEEDED",
        /// The listing expired first
        Expired = "EXPIRED",
        /// Cancelled
        Cancelled = "CANCELLED",
    }
}

wire_enum! {
    /// Status of an order.
    pub enum OrderStatus as ORDER_STATUS: Str {
        /// Bids are still being processed
        InProgress = "IN_PROGRESS",
        /// Every bid has been processed
        Completed = "COMPLETED",
    }
}

wire_enum! {
    /// Sort direction for list and search requests.
    pub enum SortDirection as SORT_DIRECTION: Str {
        /// Ascending
        Asc = "asc",
        /// Descending
        Desc = "desc",
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::WireEnum;

    #[test]
    fn test_rating_wire_values() {
        assert_eq!(ProsperRating::NotApplicable.to_string(), "N/A");
        assert_eq!(ProsperRating::from_wire_str("AA"), Some(ProsperRating::AA));
        assert_eq!(PROSPER_RATING.members.len(), 9);
    }

    #[test]
    fn test_integer_enums_resolve_from_text() {
        assert_eq!(IncomeRange::from_wire_str("6"), Some(IncomeRange::Over100000));
        assert_eq!(ListingCategory::from_wire_str("7"), Some(ListingCategory::Other));
        assert_eq!(ListingStatus::from_wire_str("1"), None);
    }

    #[test]
    fn test_listing_status_terminal() {
        assert!(!ListingStatus::Active.is_terminal());
        assert!(ListingStatus::Completed.is_terminal());
    }

    #[test]
    fn test_every_state_is_declared() {
        assert_eq!(BorrowerState::ALL.len(), 51);
        assert_eq!(BorrowerState::from_wire_str("AL"), Some(BorrowerState::AL));
    }

    #[test]
    fn test_enum_serializes_as_wire_value() {
        assert_eq!(serde_json::to_string(&BidStatus::Pending).unwrap(), "\"PENDING\"");
        assert_eq!(serde_json::to_string(&ListingStatus::Completed).unwrap(), "5");
    }

    #[test]
    fn test_sort_direction_default() {
        assert_eq!(SortDirection::default().to_string(), "desc");
    }
}
