use anchor_lang::prelude::*;

use crate::{constants::PRICE_SCALE_DECIMALS, error::ErrorCode};

const PYTH_PUSH_ORACLE_PROGRAM_ID: Pubkey = pubkey!("pythWSnswVUd12oZpeFP8e9CVaEqJg25g1Vtc2biRsT");
const PRICE_UPDATE_V2_DISCRIMINATOR: [u8; 8] = [34, 241, 35, 99, 157, 126, 244, 205];

/// One oracle round-trip, rescaled to the common 1e8 price scale so two feeds
/// can be compared directly.
#[derive(Clone, Copy, Debug)]
pub struct PriceWithConfidence {
    pub price: i64,
    pub confidence: u64,
    pub publish_time: i64,
}

/// Direct point query against a Pyth push-oracle price-update account. No
/// caching; every call re-validates owner, discriminator, verification level,
/// feed identity and staleness.
pub fn read_price_with_confidence(
    price_update: &UncheckedAccount,
    expected_feed: &Pubkey,
    clock: &Clock,
    max_age_secs: i64,
) -> Result<PriceWithConfidence> {
    require_keys_eq!(
        *price_update.owner,
        PYTH_PUSH_ORACLE_PROGRAM_ID,
        ErrorCode::InvalidFeed
    );

    let data = price_update
        .try_borrow_data()
        .map_err(|_| error!(ErrorCode::InvalidFeed))?;
    require!(data.len() > 8, ErrorCode::StaleFeed);
    require!(
        data[..8] == PRICE_UPDATE_V2_DISCRIMINATOR,
        ErrorCode::InvalidFeed
    );

    let mut payload = &data[8..];
    let update =
        PriceUpdateV2Wire::deserialize(&mut payload).map_err(|_| error!(ErrorCode::InvalidFeed))?;

    require!(
        matches!(update.verification_level, VerificationLevelWire::Full),
        ErrorCode::InvalidFeed
    );
    require!(
        update.price_message.feed_id == expected_feed.to_bytes(),
        ErrorCode::InvalidFeed
    );

    let publish_time = update.price_message.publish_time;
    let age = clock
        .unix_timestamp
        .checked_sub(publish_time)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    require!(age >= 0, ErrorCode::InvalidFeed);
    require!(age <= max_age_secs, ErrorCode::StaleFeed);

    Ok(PriceWithConfidence {
        price: rescale_price(update.price_message.price, update.price_message.exponent)?,
        confidence: rescale_confidence(update.price_message.conf, update.price_message.exponent)?,
        publish_time,
    })
}

fn rescale_price(price: i64, exponent: i32) -> Result<i64> {
    let magnitude = rescale_magnitude(price.unsigned_abs() as u128, exponent)?;
    let magnitude = i64::try_from(magnitude).map_err(|_| error!(ErrorCode::MathOverflow))?;
    Ok(if price < 0 { -magnitude } else { magnitude })
}

fn rescale_confidence(conf: u64, exponent: i32) -> Result<u64> {
    let scaled = rescale_magnitude(conf as u128, exponent)?;
    u64::try_from(scaled).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Rescale a feed value from `10^exponent` units to `10^-PRICE_SCALE_DECIMALS`
/// units.
fn rescale_magnitude(value: u128, exponent: i32) -> Result<u128> {
    let shift = exponent
        .checked_add(PRICE_SCALE_DECIMALS as i32)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    if shift >= 0 {
        value
            .checked_mul(pow10(shift as u32)?)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    } else {
        value
            .checked_div(pow10((-shift) as u32)?)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}

fn pow10(power: u32) -> Result<u128> {
    10_u128
        .checked_pow(power)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, PartialEq, Eq, Debug)]
enum VerificationLevelWire {
    Partial { num_signatures: u8 },
    Full,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug)]
struct PriceFeedMessageWire {
    feed_id: [u8; 32],
    price: i64,
    conf: u64,
    exponent: i32,
    publish_time: i64,
    prev_publish_time: i64,
    ema_price: i64,
    ema_conf: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug)]
struct PriceUpdateV2Wire {
    write_authority: Pubkey,
    verification_level: VerificationLevelWire,
    price_message: PriceFeedMessageWire,
    posted_slot: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescales_negative_exponents_up() {
        // Pyth commonly publishes with exponent -8: already at engine scale.
        assert_eq!(rescale_price(100_000_000, -8).unwrap(), 100_000_000);
        // Exponent -5 gains three decimal places.
        assert_eq!(rescale_price(100_000, -5).unwrap(), 100_000_000);
        assert_eq!(rescale_confidence(25, -5).unwrap(), 25_000);
    }

    #[test]
    fn rescales_finer_exponents_down() {
        assert_eq!(rescale_price(1_000_000_000_000, -12).unwrap(), 100_000_000);
        assert_eq!(rescale_confidence(1_999, -12).unwrap(), 0);
    }

    #[test]
    fn preserves_sign() {
        assert_eq!(rescale_price(-100_000, -5).unwrap(), -100_000_000);
    }
}
