//! Built-in company records served when no dataset file is configured.

use chrono::{DateTime, Utc};
use common::company::{
    CompanyComparables, CompanyDetail, CompanyPredictions, CompanyStats, Filing, FilingSource,
    FilingType,
};

pub fn fixture_companies() -> Vec<CompanyDetail> {
    vec![
        example_corporation(),
        record(
            "company_002",
            "Innovate Inc.",
            "INVT",
            "Technology",
            Some("Software"),
            "Workflow automation suites for mid-market enterprises.",
            Some("https://innovate.example.com"),
            CompanyStats {
                ltm_revenue: Some(120_000_000.0),
                ltm_revenue_growth: Some(18.2),
                share_price: Some(12.8),
                equity_value: Some(500_000_000.0),
                enterprise_value: Some(500_400_000.0),
                multiple_ev_to_revenue: Some(4.17),
                multiple_ev_to_ebitda: Some(24.0),
                price_to_earnings: Some(41.0),
                ..CompanyStats::default()
            },
            "2025-03-20T12:00:00Z",
            "2025-08-01T16:00:00Z",
        ),
        record(
            "company_003",
            "GreenTech Solutions",
            "GTS",
            "Renewable Energy",
            Some("Solar"),
            "Utility-scale solar arrays and grid storage retrofits.",
            Some("https://greentech.example.com"),
            CompanyStats {
                ltm_revenue: Some(180_000_000.0),
                ltm_revenue_growth: Some(25.4),
                share_price: Some(31.2),
                equity_value: Some(750_000_000.0),
                enterprise_value: Some(750_600_000.0),
                multiple_ev_to_revenue: Some(4.17),
                price_to_earnings: Some(33.5),
                ..CompanyStats::default()
            },
            "2025-03-25T10:30:00Z",
            "2025-08-01T16:10:00Z",
        ),
        record(
            "company_004",
            "MediCore Health",
            "MCH",
            "Healthcare",
            Some("Medical Devices"),
            "Implantable monitoring devices and hospital telemetry.",
            Some("https://medicore.example.com"),
            CompanyStats {
                ltm_revenue: Some(450_000_000.0),
                ltm_revenue_growth: Some(9.1),
                share_price: Some(88.4),
                equity_value: Some(1_250_000_000.0),
                enterprise_value: Some(1_251_000_000.0),
                multiple_ev_to_revenue: Some(2.78),
                multiple_ev_to_ebitda: Some(18.0),
                price_to_earnings: Some(24.8),
                ..CompanyStats::default()
            },
            "2025-04-10T09:00:00Z",
            "2025-08-01T16:12:00Z",
        ),
        record(
            "company_005",
            "Quantum Dynamics",
            "QDY",
            "Technology",
            Some("Semiconductors"),
            "Photonic interconnects for datacenter accelerators.",
            Some("https://quantumdynamics.example.com"),
            CompanyStats {
                ltm_revenue: Some(300_000_000.0),
                ltm_revenue_growth: Some(31.0),
                share_price: Some(47.1),
                equity_value: Some(960_000_000.0),
                enterprise_value: Some(960_000_000.0),
                multiple_ev_to_revenue: Some(3.20),
                multiple_ev_to_ebitda: Some(18.5),
                ..CompanyStats::default()
            },
            "2025-04-18T14:45:00Z",
            "2025-08-01T16:13:00Z",
        ),
        record(
            "company_006",
            "AgriCorp Ltd.",
            "AGR",
            "Agriculture",
            None,
            "Row-crop genetics and precision irrigation systems.",
            None,
            CompanyStats {
                ltm_revenue: Some(90_000_000.0),
                share_price: Some(18.6),
                equity_value: Some(350_000_000.0),
                enterprise_value: Some(350_100_000.0),
                multiple_ev_to_revenue: Some(3.89),
                ..CompanyStats::default()
            },
            "2025-05-01T11:00:00Z",
            "2025-08-01T16:14:00Z",
        ),
        record(
            "company_007",
            "Urban Mobility Co.",
            "UMC",
            "Transportation",
            Some("Micromobility"),
            "Dockless scooter and e-bike fleets in forty metro areas.",
            Some("https://urbanmobility.example.com"),
            CompanyStats {
                ltm_revenue: Some(150_000_000.0),
                ltm_revenue_growth: Some(14.7),
                share_price: Some(22.9),
                equity_value: Some(620_000_000.0),
                enterprise_value: Some(619_500_000.0),
                multiple_ev_to_revenue: Some(4.13),
                ..CompanyStats::default()
            },
            "2025-05-12T08:30:00Z",
            "2025-08-01T16:15:00Z",
        ),
        record(
            "company_008",
            "Finlytics AI",
            "FAI",
            "Finance",
            Some("Analytics Software"),
            "Portfolio risk analytics for asset managers.",
            Some("https://finlytics.example.com"),
            CompanyStats {
                ltm_revenue: Some(200_000_000.0),
                ltm_revenue_growth: Some(22.3),
                share_price: Some(64.0),
                equity_value: Some(810_000_000.0),
                enterprise_value: Some(810_000_000.0),
                multiple_ev_to_revenue: Some(4.05),
                price_to_earnings: Some(29.0),
                ..CompanyStats::default()
            },
            "2025-05-25T13:15:00Z",
            "2025-08-01T16:16:00Z",
        ),
        record(
            "company_009",
            "NeuroVerse Labs",
            "NVL",
            "Biotechnology",
            Some("Neurotechnology"),
            "Brain-computer interface therapeutics in phase two trials.",
            Some("https://neuroverse.example.com"),
            CompanyStats {
                ltm_revenue: Some(120_000_000.0),
                ltm_revenue_growth: Some(40.9),
                share_price: Some(53.7),
                equity_value: Some(690_000_000.0),
                enterprise_value: Some(690_000_000.0),
                multiple_ev_to_revenue: Some(5.75),
                ..CompanyStats::default()
            },
            "2025-06-02T15:20:00Z",
            "2025-08-01T16:17:00Z",
        ),
        record(
            "company_010",
            "Oceanix Marine",
            "OCM",
            "Shipping",
            Some("Container Shipping"),
            "Feeder-route container carrier across southeast Asia.",
            None,
            // unlisted subsidiary, no quoted share price
            CompanyStats {
                ltm_revenue: Some(140_000_000.0),
                equity_value: Some(410_000_000.0),
                enterprise_value: Some(410_200_000.0),
                multiple_ev_to_revenue: Some(2.93),
                ..CompanyStats::default()
            },
            "2025-06-15T10:00:00Z",
            "2025-08-01T16:18:00Z",
        ),
        record(
            "company_011",
            "Helix Robotics",
            "HLX",
            "Industrial Automation",
            Some("Robotics"),
            "Six-axis assembly arms and vision-guided pick cells.",
            Some("https://helixrobotics.example.com"),
            CompanyStats {
                ltm_revenue: Some(310_000_000.0),
                ltm_revenue_growth: Some(11.8),
                share_price: Some(71.5),
                equity_value: Some(980_000_000.0),
                enterprise_value: Some(979_600_000.0),
                multiple_ev_to_revenue: Some(3.16),
                multiple_ev_to_ebitda: Some(18.2),
                price_to_earnings: Some(35.2),
                ..CompanyStats::default()
            },
            "2025-06-28T17:10:00Z",
            "2025-08-01T16:19:00Z",
        ),
        record(
            "company_012",
            "Lumina Solar",
            "LSR",
            "Energy",
            Some("Solar"),
            "Residential rooftop installation and financing.",
            Some("https://luminasolar.example.com"),
            CompanyStats {
                ltm_revenue: Some(240_000_000.0),
                ltm_revenue_growth: Some(19.6),
                share_price: Some(27.8),
                equity_value: Some(720_000_000.0),
                enterprise_value: Some(720_000_000.0),
                multiple_ev_to_revenue: Some(3.00),
                ..CompanyStats::default()
            },
            "2025-07-10T12:00:00Z",
            "2025-08-01T16:20:00Z",
        ),
    ]
}

/// The one record carrying the full filing history, mirroring what a fully
/// ingested company looks like.
fn example_corporation() -> CompanyDetail {
    let filing = Filing {
        id: "filing_123".to_string(),
        cik: "0000123456".to_string(),
        company_id: "company_001".to_string(),
        filing_type: FilingType::TenK,
        period_end: stamp("2024-12-31T00:00:00Z"),
        filing_date: stamp("2025-02-15T00:00:00Z"),
        revenue: Some(50_000_000.0),
        net_income: Some(7_000_000.0),
        ebitda: Some(9_000_000.0),
        shares_outstanding: Some(10_000_000.0),
        cash: Some(12_000_000.0),
        debt: Some(5_000_000.0),
        document_url: Some("https://example.com/filing.pdf".to_string()),
        source: Some(FilingSource::Edgar),
        created_at: stamp("2025-02-15T10:00:00Z"),
        updated_at: stamp("2025-02-15T10:00:00Z"),
    };

    CompanyDetail {
        id: "company_001".to_string(),
        name: "Example Corporation".to_string(),
        ticker: "EXM".to_string(),
        industry: Some("Technology".to_string()),
        sub_industry: Some("Software".to_string()),
        description: Some("Document workflow platform for regulated industries.".to_string()),
        website: Some("https://example.com".to_string()),
        filings: vec![filing.clone()],
        latest_filing: Some(filing),
        stats: Some(CompanyStats {
            ltm_revenue: Some(49_000_000.0),
            ltm_revenue_growth: Some(12.5),
            ltm_net_income: Some(6_800_000.0),
            ltm_ebitda: Some(8_800_000.0),
            share_price: Some(25.5),
            shares_outstanding: Some(10_000_000.0),
            equity_value: Some(255_000_000.0),
            cash: Some(12_000_000.0),
            debt: Some(5_000_000.0),
            enterprise_value: Some(248_000_000.0),
            multiple_ev_to_revenue: Some(5.06),
            multiple_ev_to_ebitda: Some(28.18),
            price_to_earnings: Some(37.5),
            median_fund_investment_percentage_change: Some(2.5),
        }),
        comparables: Some(CompanyComparables {
            median_ev_to_revenue: Some(4.2),
            median_ev_to_ebitda: Some(22.5),
            median_pe_ratio: Some(28.3),
        }),
        predictions: Some(CompanyPredictions {
            projected_5y_share_price: Some(75.0),
        }),
        created_at: stamp("2025-02-15T10:00:00Z"),
        updated_at: stamp("2025-08-01T15:45:00Z"),
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    ticker: &str,
    industry: &str,
    sub_industry: Option<&str>,
    description: &str,
    website: Option<&str>,
    stats: CompanyStats,
    created_at: &str,
    updated_at: &str,
) -> CompanyDetail {
    CompanyDetail {
        id: id.to_string(),
        name: name.to_string(),
        ticker: ticker.to_string(),
        industry: Some(industry.to_string()),
        sub_industry: sub_industry.map(str::to_string),
        description: Some(description.to_string()),
        website: website.map(str::to_string),
        filings: Vec::new(),
        latest_filing: None,
        stats: Some(stats),
        comparables: None,
        predictions: None,
        created_at: stamp(created_at),
        updated_at: stamp(updated_at),
    }
}

fn stamp(text: &str) -> DateTime<Utc> {
    text.parse().unwrap_or_default()
}
