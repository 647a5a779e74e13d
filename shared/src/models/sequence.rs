//! Sequence Code Model
//!
//! Business identifiers minted by the code generator have the shape
//! `PREFIX-YYYY-NNNNNN`, one counter per (domain, calendar year).
//!
//! | domain           | prefix | collection                          |
//! |------------------|--------|-------------------------------------|
//! | ticket           | TKT    | `ticket_sequence_counter`           |
//! | employee         | Emp    | `employee_sequence_counter`         |
//! | technician-job   | JOB    | `technician_job_sequence_counter`   |
//! | supplier         | SUP    | `supplier_sequence_counter`         |
//! | customer-invoice | INV    | `customer_invoice_sequence_counter` |
//! | quotation        | QUO    | `quotation_sequence_counter`        |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Minimum width of the numeric suffix (padding, not a cap)
pub const SEQ_WIDTH: usize = 6;

/// Domains that own a sequence counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeDomain {
    Ticket,
    Employee,
    TechnicianJob,
    Supplier,
    CustomerInvoice,
    Quotation,
}

impl CodeDomain {
    /// Every domain, in declaration order
    pub const ALL: [CodeDomain; 6] = [
        CodeDomain::Ticket,
        CodeDomain::Employee,
        CodeDomain::TechnicianJob,
        CodeDomain::Supplier,
        CodeDomain::CustomerInvoice,
        CodeDomain::Quotation,
    ];

    /// Kebab-case identifier used in logs and JSON
    pub const fn as_str(&self) -> &'static str {
        match self {
            CodeDomain::Ticket => "ticket",
            CodeDomain::Employee => "employee",
            CodeDomain::TechnicianJob => "technician-job",
            CodeDomain::Supplier => "supplier",
            CodeDomain::CustomerInvoice => "customer-invoice",
            CodeDomain::Quotation => "quotation",
        }
    }

    /// Fixed code prefix. `Emp` keeps its mixed case.
    pub const fn prefix(&self) -> &'static str {
        match self {
            CodeDomain::Ticket => "TKT",
            CodeDomain::Employee => "Emp",
            CodeDomain::TechnicianJob => "JOB",
            CodeDomain::Supplier => "SUP",
            CodeDomain::CustomerInvoice => "INV",
            CodeDomain::Quotation => "QUO",
        }
    }

    /// Name of the persisted counter collection (redb table / SQL table)
    pub const fn collection(&self) -> &'static str {
        match self {
            CodeDomain::Ticket => "ticket_sequence_counter",
            CodeDomain::Employee => "employee_sequence_counter",
            CodeDomain::TechnicianJob => "technician_job_sequence_counter",
            CodeDomain::Supplier => "supplier_sequence_counter",
            CodeDomain::CustomerInvoice => "customer_invoice_sequence_counter",
            CodeDomain::Quotation => "quotation_sequence_counter",
        }
    }

    /// Path segment of the preview endpoint under `/auto-code-generator`
    ///
    /// `techcian-job-code` is the path the dashboard already calls.
    pub const fn route_slug(&self) -> &'static str {
        match self {
            CodeDomain::Ticket => "ticket-code",
            CodeDomain::Employee => "employee-code",
            CodeDomain::TechnicianJob => "techcian-job-code",
            CodeDomain::Supplier => "supplier-code",
            CodeDomain::CustomerInvoice => "customer-invoice-code",
            CodeDomain::Quotation => "quotation-auto-code",
        }
    }

    /// JSON key of the preview response body
    pub const fn response_key(&self) -> &'static str {
        match self {
            CodeDomain::Ticket => "ticketCode",
            CodeDomain::Employee => "employeeCode",
            CodeDomain::TechnicianJob => "jobCode",
            CodeDomain::Supplier => "supplierCode",
            CodeDomain::CustomerInvoice => "customerInvoiceCode",
            CodeDomain::Quotation => "quotationCode",
        }
    }

    /// Human-readable label used in error messages ("ticket", "technician job")
    pub const fn label(&self) -> &'static str {
        match self {
            CodeDomain::Ticket => "ticket",
            CodeDomain::Employee => "employee",
            CodeDomain::TechnicianJob => "technician job",
            CodeDomain::Supplier => "supplier",
            CodeDomain::CustomerInvoice => "customer invoice",
            CodeDomain::Quotation => "quotation",
        }
    }

    /// Resolve a code prefix back to its domain (case-sensitive)
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.prefix() == prefix)
    }
}

impl fmt::Display for CodeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeDomain {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::UnknownCodeDomain,
                    format!("Unknown code domain: {}", s),
                )
                .with_detail("domain", s)
            })
    }
}

/// Persisted counter: one record per (domain, year)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct SequenceCounter {
    pub year: i32,
    /// Number of codes issued for `year`; 0 before the first increment
    pub seq: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl SequenceCounter {
    /// Counter state before the first increment
    pub fn empty(year: i32, now: i64) -> Self {
        Self {
            year,
            seq: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply one increment, returning the new `seq`
    pub fn bump(&mut self, now: i64) -> i64 {
        self.seq += 1;
        self.updated_at = now;
        self.seq
    }
}

/// A formatted business code: `PREFIX-YYYY-NNNNNN`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceCode {
    prefix: String,
    year: i32,
    seq: i64,
}

impl SequenceCode {
    pub fn new(domain: CodeDomain, year: i32, seq: i64) -> Self {
        Self {
            prefix: domain.prefix().to_string(),
            year,
            seq,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn seq(&self) -> i64 {
        self.seq
    }

    /// Domain owning this prefix, if it is one of the known prefixes
    pub fn domain(&self) -> Option<CodeDomain> {
        CodeDomain::from_prefix(&self.prefix)
    }
}

impl fmt::Display for SequenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:04}-{:0width$}",
            self.prefix,
            self.year,
            self.seq,
            width = SEQ_WIDTH
        )
    }
}

impl FromStr for SequenceCode {
    type Err = AppError;

    /// Accepts `^[A-Za-z]+-\d{4}-\d{6,}$`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Invalid sequence code: {}", s),
            )
        };

        let mut parts = s.splitn(3, '-');
        let (Some(prefix), Some(year), Some(seq)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if seq.len() < SEQ_WIDTH || !seq.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        Ok(Self {
            prefix: prefix.to_string(),
            year: year.parse().map_err(|_| invalid())?,
            seq: seq.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for SequenceCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SequenceCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
