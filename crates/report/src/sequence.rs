use crate::ReportContext;
use itertools::Itertools;
use std::fmt::Write;
use stheno_fuzz::{AddressRole, BasicTx};

/// Renders one transaction as a single line.
///
/// `print_addresses` is decided per sequence: sender/receiver names only
/// disambiguate when the sequence mixes senders, see [`sequence_lines`].
pub fn render_tx(tx: &BasicTx, print_addresses: bool, ctx: ReportContext<'_>) -> String {
    let mut line = tx.call.to_string();

    // A wait advances the clock without calling anything; only its delays
    // are worth showing.
    if tx.call.is_wait() {
        push_delays(&mut line, tx);
        return line;
    }

    if print_addresses {
        line.push_str(&ctx.names.name(AddressRole::Sender, tx.sender));
        line.push_str(&ctx.names.name(AddressRole::Receiver, tx.target));
    }
    if tx.gas != ctx.config.tx_gas {
        let _ = write!(line, " Gas: {}", tx.gas);
    }
    if !tx.gas_price.is_zero() {
        let _ = write!(line, " Gas price: {}", tx.gas_price);
    }
    if !tx.value.is_zero() {
        let _ = write!(line, " Value: {}", tx.value);
    }
    push_delays(&mut line, tx);
    line
}

fn push_delays(line: &mut String, tx: &BasicTx) {
    if !tx.warp.is_zero() {
        let _ = write!(line, " Time delay: {} seconds", tx.warp);
    }
    if !tx.roll.is_zero() {
        let _ = write!(line, " Block delay: {}", tx.roll);
    }
}

/// Renders a call sequence into its indented lines, without terminators.
///
/// Addresses are printed only when the sequence has anything other than one
/// distinct sender.
pub fn sequence_lines(txs: &[BasicTx], ctx: ReportContext<'_>) -> Vec<String> {
    let print_addresses = txs.iter().map(|tx| tx.sender).unique().count() != 1;
    txs.iter().map(|tx| format!("    {}", render_tx(tx, print_addresses, ctx))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Address, U256};
    use stheno_fuzz::{AddressLabels, CampaignConfig, FunctionCall, TxCall};

    fn call_tx(name: &str, sender: Address, config: &CampaignConfig) -> BasicTx {
        BasicTx {
            call: TxCall::Call(FunctionCall::new(name, vec![])),
            sender,
            target: address!("0000000000000000000000000000000000030000"),
            gas: config.tx_gas,
            ..Default::default()
        }
    }

    #[test]
    fn bare_call_has_no_suffixes() {
        let config = CampaignConfig::default();
        let names = AddressLabels::default();
        let ctx = ReportContext { config: &config, names: &names };

        let tx = call_tx("poke", Address::ZERO, &config);
        assert_eq!(render_tx(&tx, false, ctx), "poke()");
    }

    #[test]
    fn each_field_adds_exactly_its_suffix() {
        let config = CampaignConfig::default();
        let names = AddressLabels::default();
        let ctx = ReportContext { config: &config, names: &names };
        let base = call_tx("poke", Address::ZERO, &config);

        let tx = BasicTx { gas: 21_000, ..base.clone() };
        assert_eq!(render_tx(&tx, false, ctx), "poke() Gas: 21000");

        let tx = BasicTx { gas_price: U256::from(7), ..base.clone() };
        assert_eq!(render_tx(&tx, false, ctx), "poke() Gas price: 7");

        let tx = BasicTx { value: U256::from(123), ..base.clone() };
        assert_eq!(render_tx(&tx, false, ctx), "poke() Value: 123");

        let tx = BasicTx { warp: U256::from(60), ..base.clone() };
        assert_eq!(render_tx(&tx, false, ctx), "poke() Time delay: 60 seconds");

        let tx = BasicTx { roll: U256::from(5), ..base };
        assert_eq!(render_tx(&tx, false, ctx), "poke() Block delay: 5");
    }

    #[test]
    fn suffixes_keep_a_fixed_order() {
        let config = CampaignConfig::default();
        let names = AddressLabels::default();
        let ctx = ReportContext { config: &config, names: &names };

        let tx = BasicTx {
            gas: 21_000,
            gas_price: U256::from(2),
            value: U256::from(1),
            warp: U256::from(10),
            roll: U256::from(3),
            ..call_tx("poke", Address::ZERO, &config)
        };
        assert_eq!(
            render_tx(&tx, false, ctx),
            "poke() Gas: 21000 Gas price: 2 Value: 1 Time delay: 10 seconds Block delay: 3"
        );
    }

    #[test]
    fn waits_show_only_delays() {
        let config = CampaignConfig::default();
        let names = AddressLabels::default();
        let ctx = ReportContext { config: &config, names: &names };

        let tx = BasicTx {
            gas_price: U256::from(9),
            value: U256::from(9),
            warp: U256::from(30),
            roll: U256::from(2),
            ..Default::default()
        };
        // addresses and gas fields never apply to a wait
        assert_eq!(render_tx(&tx, true, ctx), "*wait* Time delay: 30 seconds Block delay: 2");
    }

    #[test]
    fn mixed_senders_show_addresses() {
        let config = CampaignConfig::default();
        let names = AddressLabels::default();
        let ctx = ReportContext { config: &config, names: &names };

        let a = address!("0000000000000000000000000000000000010000");
        let b = address!("0000000000000000000000000000000000020000");
        let txs = [call_tx("poke", a, &config), call_tx("prod", b, &config)];

        assert_eq!(
            sequence_lines(&txs, ctx),
            vec![
                "    poke() from: 0x0000000000000000000000000000000000010000 to: 0x0000000000000000000000000000000000030000",
                "    prod() from: 0x0000000000000000000000000000000000020000 to: 0x0000000000000000000000000000000000030000",
            ]
        );
    }

    #[test]
    fn single_sender_hides_addresses() {
        let config = CampaignConfig::default();
        let names = AddressLabels::default();
        let ctx = ReportContext { config: &config, names: &names };

        let a = address!("0000000000000000000000000000000000010000");
        let txs = [call_tx("poke", a, &config), call_tx("prod", a, &config)];

        assert_eq!(sequence_lines(&txs, ctx), vec!["    poke()", "    prod()"]);
    }
}
