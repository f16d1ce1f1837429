/// One tracked ticker with its display metadata.
///
/// The roster is compiled in, so all fields are static strings. The order of
/// `TickerSpec` values in the registry is significant: it defines the order
/// of `items` in every persisted snapshot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickerSpec {
    /// Exchange ticker symbol, unique within the roster (e.g., "NVDA")
    pub symbol: &'static str,
    /// Japanese display name shown by the dashboard
    pub name_jp: &'static str,
    /// Company name (e.g., "NVIDIA")
    pub company: &'static str,
    /// Sector label, localized
    pub sector: &'static str,
}
