use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::PolicyConfig};

/// Capabilities checked before any mutating call. The admin satisfies every
/// role; each other role maps to exactly one principal in `PolicyConfig`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Admin,
    Config,
    Keeper,
    Pauser,
    SwapHost,
    BurstManager,
}

pub fn require_role(signer: &Signer<'_>, config: &Account<PolicyConfig>, role: Role) -> Result<()> {
    require!(
        holds_role(&signer.key(), config, role),
        ErrorCode::Unauthorized
    );
    Ok(())
}

pub fn holds_role(principal: &Pubkey, config: &PolicyConfig, role: Role) -> bool {
    if *principal == config.admin {
        return true;
    }

    let allowed = match role {
        Role::Admin => config.admin,
        Role::Config => config.config_authority,
        Role::Keeper => config.keeper_authority,
        Role::Pauser => config.pauser_authority,
        Role::SwapHost => config.swap_authority,
        Role::BurstManager => config.burst_authority,
    };
    *principal == allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(admin: Pubkey, keeper: Pubkey) -> PolicyConfig {
        PolicyConfig {
            admin,
            config_authority: Pubkey::new_unique(),
            keeper_authority: keeper,
            pauser_authority: Pubkey::new_unique(),
            swap_authority: Pubkey::new_unique(),
            burst_authority: Pubkey::new_unique(),
            paused: false,
            created_at: 0,
            last_updated_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn admin_holds_every_role() {
        let admin = Pubkey::new_unique();
        let config = config(admin, Pubkey::new_unique());
        for role in [
            Role::Admin,
            Role::Config,
            Role::Keeper,
            Role::Pauser,
            Role::SwapHost,
            Role::BurstManager,
        ] {
            assert!(holds_role(&admin, &config, role));
        }
    }

    #[test]
    fn keeper_holds_only_keeper() {
        let keeper = Pubkey::new_unique();
        let config = config(Pubkey::new_unique(), keeper);
        assert!(holds_role(&keeper, &config, Role::Keeper));
        assert!(!holds_role(&keeper, &config, Role::Config));
        assert!(!holds_role(&keeper, &config, Role::Pauser));
        assert!(!holds_role(&Pubkey::new_unique(), &config, Role::Keeper));
    }
}
