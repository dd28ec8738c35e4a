//! Embedded reference data — the three judgment-deferral context types.
//!
//! Definition order is display order. Each record's first example is
//! its deep-dive sentence.

use super::{ContextType, Stage};

pub(super) fn entries() -> Vec<ContextType> {
    vec![
        ContextType {
            key: "position_dependent",
            label: "立場依存",
            description: "意思決定を自分では行わず、相手の立場や役割に判断を委ねる文脈タイプ。",
            deep_dive: "その辺は、〇〇さんの判断でいいと思います。",
            examples: &[
                "その辺は、〇〇さんの判断でいいと思います。",
                "私はどちらでも大丈夫です。",
                "上の判断に従います。",
                "〇〇さんが決めた方で。",
                "その件は任せます。",
            ],
            interpretation: &[
                Stage {
                    label: "stage1",
                    text: "判断に関する発話である。",
                },
                Stage {
                    label: "stage2",
                    text: "話者自身の判断は示されていない。",
                },
                Stage {
                    label: "stage3",
                    text: "判断主体が他者（〇〇さん）に置かれている。",
                },
                Stage {
                    label: "stage4",
                    text: "話者の責任は暗黙的に回避されている。",
                },
                Stage {
                    label: "stage5",
                    text: "最終的な意思決定は相手の立場に委ねられている。",
                },
            ],
            note: "判断を他者に移すことで、対立回避や責任分散を実現する構造を持つ。",
        },
        ContextType {
            key: "implicit_rule",
            label: "暗黙ルール",
            description: "明示的な決定主体や規則を示さず、慣習や一般性を根拠として判断を固定する文脈タイプ。",
            deep_dive: "普通は、そういうやり方ですよね。",
            examples: &[
                "普通は、そういうやり方ですよね。",
                "いつもそうしてますよ。",
                "暗黙的にそうなってます。",
                "特に決まってないけど、だいたいこうです。",
                "今まではこのやり方でした。",
            ],
            interpretation: &[
                Stage {
                    label: "stage1",
                    text: "方法や判断基準についての発話。",
                },
                Stage {
                    label: "stage2",
                    text: "明確な決定者は存在しない。",
                },
                Stage {
                    label: "stage3",
                    text: "『普通』『いつも』といった規範が根拠となっている。",
                },
                Stage {
                    label: "stage4",
                    text: "異議を唱えにくい構造が形成されている。",
                },
                Stage {
                    label: "stage5",
                    text: "判断は慣習に固定され、個人の責任は曖昧化されている。",
                },
            ],
            note: "判断の根拠を慣習に置くことで、責任主体を消失させる文脈構造。",
        },
        ContextType {
            key: "responsibility_shift",
            label: "責任の所在",
            description: "判断を進めつつも、最終的な可否や責任を他者に委ねる文脈タイプ。",
            deep_dive: "それで問題がなければ進めますが。",
            examples: &[
                "それで問題がなければ進めますが。",
                "問題あれば言ってください。",
                "ダメなら止めます。",
                "OK出たらやります。",
                "一応確認ですけど…。",
            ],
            interpretation: &[
                Stage {
                    label: "stage1",
                    text: "行動や判断を前提とした発話。",
                },
                Stage {
                    label: "stage2",
                    text: "条件付きでの実行が示されている。",
                },
                Stage {
                    label: "stage3",
                    text: "最終判断は話者以外に委ねられている。",
                },
                Stage {
                    label: "stage4",
                    text: "結果に対する責任が外部化されている。",
                },
                Stage {
                    label: "stage5",
                    text: "判断と責任が分離された状態で行動が保留されている。",
                },
            ],
            note: "実行意図を示しつつ、責任の所在を相手に移動させる構造を持つ。",
        },
    ]
}
