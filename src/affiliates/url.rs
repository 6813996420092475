//! Outbound URL construction for matched catalog items.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::affiliates::partners::{PartnerId, PartnerTable};
use crate::affiliates::AffItem;

// Same unescaped set as JS encodeURIComponent, so spaces become %20 and
// stored links keep their shape across the old and new stacks.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Build the monetized outbound URL for a catalog item.
///
/// A `direct_url` bypasses search-query construction but is still decorated
/// by the item's partner. Otherwise the partner is resolved as: explicit
/// override, then the item's default, then Amazon; the primary query (or the
/// label when no queries exist) fills the partner's search template.
///
/// Total function: every missing piece falls back to a default, so this
/// always returns a well-formed URL.
pub fn build_url(
    item: &AffItem,
    partner_override: Option<PartnerId>,
    partners: &PartnerTable,
) -> String {
    if let Some(direct) = &item.direct_url {
        return match item.partner {
            Some(id) => partners.get(id).decorate(direct.clone()),
            None => direct.clone(),
        };
    }

    let id = partner_override
        .or(item.partner)
        .unwrap_or(PartnerId::DEFAULT);
    let partner = partners.get(id);
    let query = item
        .queries
        .first()
        .map(String::as_str)
        .unwrap_or(&item.label);
    partner.decorate(partner.base_search(query))
}
