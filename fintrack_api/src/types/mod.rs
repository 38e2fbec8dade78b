mod meta;
pub use self::meta::{Envelope, UpstreamError};

mod value;
pub use self::value::{YahooDate, YahooValue};

mod summary;
pub use self::summary::{AssetProfile, FinancialData, Price, QuoteSummaryResponse, QuoteSummaryResult};

mod statements;
pub use self::statements::{
    BalanceSheet, BalanceSheetHistory, CashflowStatement, CashflowStatementHistory,
    IncomeStatement, IncomeStatementHistory,
};

mod ownership;
pub use self::ownership::{InstitutionOwnership, InstitutionalHolder};

mod recommendation;
pub use self::recommendation::{RecommendationPeriod, RecommendationTrend};

mod options;
pub use self::options::{OptionChainResponse, OptionChainResult, OptionContract, OptionSet};
