use std::{fmt, str::FromStr};

use crate::PanelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Architecture,
    Process,
    Risk,
    Token,
    Enhancements,
    Security,
    Governance,
    Integration,
}

impl PanelId {
    /// Button order on the page.
    pub const ALL: [PanelId; 8] = [
        PanelId::Architecture,
        PanelId::Process,
        PanelId::Risk,
        PanelId::Token,
        PanelId::Enhancements,
        PanelId::Security,
        PanelId::Governance,
        PanelId::Integration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Process => "process",
            Self::Risk => "risk",
            Self::Token => "token",
            Self::Enhancements => "enhancements",
            Self::Security => "security",
            Self::Governance => "governance",
            Self::Integration => "integration",
        }
    }

    pub fn entry(self) -> &'static PanelEntry {
        entry(self)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelId {
    type Err = PanelError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| PanelError::UnknownPanel(key.to_owned()))
    }
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct PanelEntry {
    pub id: PanelId,
    pub title: &'static str,
    pub body: &'static str,
}

static ARCHITECTURE: PanelEntry = PanelEntry {
    id: PanelId::Architecture,
    title: "1. Architecture",
    body: "\
• Blockchain Base: Ethereum ERC-20 token with cross-chain compatibility.
• Oracles: Decentralized price feeds (e.g., Chainlink, Pyth) for real-time BTC price tracking.
• Smart Contracts: Automated execution of arbitrage trades when pre-set thresholds are met.
• Bridges: Secure connections to Bitcoin and centralized exchanges (CEXs) via wrapped BTC (WBTC).
• Liquidity Pools: Used for trade execution and slippage mitigation.",
};

static PROCESS: PanelEntry = PanelEntry {
    id: PanelId::Process,
    title: "2. Process Flow",
    body: "\
1. Data Aggregation – BTC price feeds from multiple sources (DEXs, CEXs, and Oracles).
2. Arbitrage Opportunity Detection – Smart contracts identify price discrepancies.
3. Execution Automation – Token holders can trigger or stake in arbitrage execution pools.
4. Settlement – Profits are distributed to liquidity providers and token stakers in ETH or WBTC.",
};

static RISK: PanelEntry = PanelEntry {
    id: PanelId::Risk,
    title: "3. Risk Management",
    body: "\
• Slippage Protection – Order execution via MEV-resistant routing.
• Price Discrepancy Validation – Oracles must confirm deviations above a set threshold.
• Liquidity Constraints – Dynamic trade sizing to avoid price impact.
• Smart Contract Audits – Periodic security assessments to prevent exploits.",
};

static TOKEN: PanelEntry = PanelEntry {
    id: PanelId::Token,
    title: "4. Token Utility",
    body: "\
• Governance – Token holders vote on arbitrage parameters (e.g., profit-sharing ratios).
• Staking Rewards – Earn BTC-ARB tokens by staking to liquidity pools.
• Fee Discounts – Holders receive reduced fees on arbitrage executions.
• Yield Generation – Token-backed liquidity pools generate passive income.",
};

static ENHANCEMENTS: PanelEntry = PanelEntry {
    id: PanelId::Enhancements,
    title: "5. Enhancements",
    body: "\
• Layer-2 Scaling – Optimistic/ZK rollup compatibility for cheaper arbitrage execution.
• AI Optimization – Machine learning algorithms enhance trade execution strategies.
• Cross-Chain Arbitrage – Future expansion to Solana, Arbitrum, and BSC for wider arbitrage spreads.",
};

static SECURITY: PanelEntry = PanelEntry {
    id: PanelId::Security,
    title: "6. Security Framework",
    body: "\
• Multi-Sig & DAO-Based Fund Management – Prevents unauthorized fund access.
• Time-Locked Transactions – Ensures delay before execution for critical protocol changes.
• Anti-Flash Loan Mechanisms – Protects against price manipulation attacks.
• On-Chain Monitoring – Real-time analytics dashboard for transaction security.",
};

static GOVERNANCE: PanelEntry = PanelEntry {
    id: PanelId::Governance,
    title: "7. Protocol Governance",
    body: "\
• Decentralized Autonomous Organization (DAO) – BTC-ARB holders vote on upgrades.
• Proposal Mechanism – Community-driven parameter adjustments (e.g., arbitrage spreads).
• Treasury Fund Management – DAO controls protocol-generated fees for future development.",
};

static INTEGRATION: PanelEntry = PanelEntry {
    id: PanelId::Integration,
    title: "8. Integration Methods",
    body: "\
• CEX API Access – Secure integration with Binance, Coinbase, and Kraken for arbitrage trades.
• DEX Aggregators – Smart routing through 1inch, Uniswap, and SushiSwap for best execution.
• Cross-Chain Bridges – BTC Layer-2 integrations (e.g., Rootstock, ThorChain).
• Institutional-Grade SDKs – Plug-and-play APIs for arbitrage bots and automated trading desks.",
};

pub fn entry(id: PanelId) -> &'static PanelEntry {
    match id {
        PanelId::Architecture => &ARCHITECTURE,
        PanelId::Process => &PROCESS,
        PanelId::Risk => &RISK,
        PanelId::Token => &TOKEN,
        PanelId::Enhancements => &ENHANCEMENTS,
        PanelId::Security => &SECURITY,
        PanelId::Governance => &GOVERNANCE,
        PanelId::Integration => &INTEGRATION,
    }
}

pub fn lookup(key: &str) -> Result<&'static PanelEntry, PanelError> {
    key.parse::<PanelId>().map(entry)
}

pub fn entries() -> impl Iterator<Item = &'static PanelEntry> {
    PanelId::ALL.into_iter().map(entry)
}
