//! Identifier and option type enumerations accepted by the mapping endpoint.

use crate::error::FigiError;

crate::wire_enum! {
    /// Kind of identifier being looked up.
    ///
    /// `Unspecified` is the zero value and is never accepted by the API.
    pub enum IdType {
        #[default]
        Unspecified = 0 => "", "Unspecified identifier type.";
        Isin = 1 => "ID_ISIN", "ISIN - International Securities Identification Number.";
        BbUnique = 2 => "ID_BB_UNIQUE", "Unique Bloomberg Identifier - A legacy, internal Bloomberg identifier.";
        Sedol = 3 => "ID_SEDOL", "Sedol Number - Stock Exchange Daily Official List.";
        Common = 4 => "ID_COMMON", "Common Code - A nine digit identification number.";
        Wertpapier = 5 => "ID_WERTPAPIER", "Wertpapierkennnummer/WKN - German securities identification code.";
        Cusip = 6 => "ID_CUSIP", "CUSIP - Committee on Uniform Securities Identification Procedures.";
        Cins = 7 => "ID_CINS", "CINS - CUSIP International Numbering System.";
        Bb = 8 => "ID_BB", "A legacy Bloomberg identifier.";
        Bb8Chr = 9 => "ID_BB_8_CHR", "A legacy Bloomberg identifier (8 characters only).";
        Trace = 10 => "ID_TRACE", "Trace eligible bond identifier issued by FINRA.";
        Italy = 11 => "ID_ITALY", "Italian Identifier Number - The Italian Identification number consisting of five or six digits.";
        ExchSymbol = 12 => "ID_EXCH_SYMBOL", "Local Exchange Symbol - Local exchange symbol of the instrument.";
        FullExchangeSymbol = 13 => "ID_FULL_EXCHANGE_SYMBOL", "Full Exchange Symbol - Exchange symbol for futures, options and indices inclusive of base symbol and other security elements.";
        CompositeFigi = 14 => "COMPOSITE_ID_BB_GLOBAL", "Composite FIGI - Links the FIGIs of one instrument across the trading venues of a single country or market.";
        ShareClassFigi = 15 => "ID_BB_GLOBAL_SHARE_CLASS_LEVEL", "Share Class FIGI - Links the Composite FIGIs of an instrument traded in more than one country.";
        Figi = 16 => "ID_BB_GLOBAL", "Financial Instrument Global Identifier (FIGI) - Unique to an individual instrument and never reassigned.";
        SecNumDes = 17 => "ID_BB_SEC_NUM_DES", "Security ID Number Description - Descriptor for a financial instrument, similar to the ticker field with additional metadata.";
        Ticker = 18 => "TICKER", "Ticker - A specific identifier for a financial instrument that reflects common usage.";
        BaseTicker = 19 => "BASE_TICKER", "An indistinct identifier which may be linked to multiple instruments.";
        Cusip8Chr = 20 => "ID_CUSIP_8_CHR", "CUSIP (8 Characters Only) - Committee on Uniform Securities Identification Procedures.";
        OccSymbol = 21 => "OCC_SYMBOL", "OCC Symbol - A twenty-one character option symbol standardized by the Options Clearing Corporation.";
        UniqueIdFutOpt = 22 => "UNIQUE_ID_FUT_OPT", "Unique Identifier for Future Option - Bloomberg unique ticker for index, currency, single stock futures, commodities and commodity options.";
        OpraSymbol = 23 => "OPRA_SYMBOL", "OPRA Symbol - Option symbol standardized by the Options Price Reporting Authority.";
        TradingSystemIdentifier = 24 => "TRADING_SYSTEM_IDENTIFIER", "Trading System Identifier - Identifier for the instrument as used on the source trading system.";
        ShortCode = 25 => "ID_SHORT_CODE", "An exchange venue specific code to identify fixed income instruments primarily traded in Asia.";
        VendorIndexCode = 26 => "VENDOR_INDEX_CODE", "Index code assigned by the index provider for the purpose of identifying the security.";
    }
}

impl IdType {
    /// True for every real identifier type.
    pub fn is_valid(&self) -> bool {
        !matches!(self, IdType::Unspecified)
    }

    /// Identifier types that cannot be resolved without `securityType2`.
    pub fn requires_security_type2(&self) -> bool {
        matches!(self, IdType::BaseTicker | IdType::ExchSymbol)
    }
}

impl TryFrom<u8> for IdType {
    type Error = FigiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        IdType::from_u8(value).ok_or(FigiError::MissingIdType)
    }
}

crate::wire_enum! {
    /// Option flavour, used only when mapping option instruments.
    pub enum OptionType {
        #[default]
        Unspecified = 0 => "", "Unspecified option type.";
        Call = 1 => "Call", "Call option.";
        Put = 2 => "Put", "Put option.";
    }
}

impl OptionType {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, OptionType::Unspecified)
    }
}
