// File: src/core/catalog.rs
//
// Static attribute catalog: the option groups for each realm, the fixed
// color palette, and the two translation tables. Read-only for the
// process lifetime.

use crate::core::types::{ColorOption, OptionGroup, OptionKind, Realm};

pub const FASHION_GROUPS: &[OptionGroup] = &[
    OptionGroup {
        label: "Clothing Type",
        kind: OptionKind::Category,
        items: &[
            "T-Shirt", "Dress", "Bodysuit", "Underwear", "Scarf", "Coat", "Jeans", "Shorts",
            "Bikini", "Shoes", "Bag", "Gloves", "Hat", "Jewelry", "Loafers", "Heels", "Socks",
            "Ballet Flats", "Skirt", "Cardigan", "Corset", "Nightwear", "Trench Coat", "Blazer",
            "Jumpsuit",
        ],
    },
    OptionGroup {
        label: "Aesthetic Style",
        kind: OptionKind::Style,
        items: &[
            "Cottagecore", "Dark Academia", "Coquette", "Y2K", "Fairycore", "Goth", "Balletcore",
            "Vintage", "Minimal", "Streetwear", "Preppy", "Boho", "Kawaii", "Lolita", "Baroque",
            "Clean Girl", "Old Money", "Mob Wife", "Grunge", "Mermaidcore", "Witchcore",
            "Royalcore",
        ],
    },
];

pub const HOME_GROUPS: &[OptionGroup] = &[
    OptionGroup {
        label: "Room",
        kind: OptionKind::Category,
        items: &[
            "Bedroom", "Bathroom", "Kitchen", "Living Room", "Study / Office",
            "Balcony / Garden", "Nursery", "Entryway",
        ],
    },
    OptionGroup {
        label: "Item Type",
        kind: OptionKind::Category,
        items: &[
            "Bedding / Sheets", "Pillow / Cushion", "Curtains", "Rug", "Lamp", "Wall Art",
            "Vase", "Mug / Cup", "Towel", "Soap Dispenser", "Storage Box", "Candle", "Mirror",
            "Plush Toy", "Diffuser", "Tray", "Flower Pot", "Clock", "Photo Frame",
        ],
    },
    OptionGroup {
        label: "Home Style",
        kind: OptionKind::Style,
        items: &[
            "Japandi", "Cottagecore", "Maximalist", "Minimalist", "French Vintage", "Kawaii",
            "Boho", "Industrial", "Fairytale", "Dark Moody", "Pastel", "Baroque",
        ],
    },
];

pub const CHARACTER_GROUPS: &[OptionGroup] = &[
    OptionGroup {
        label: "🏰 Disney",
        kind: OptionKind::Character,
        items: &[
            "Mickey & Minnie", "Cinderella", "Ariel", "Belle", "Rapunzel", "Sleeping Beauty",
            "Snow White", "Elsa & Anna", "Moana", "Encanto", "Stitch", "Winnie the Pooh",
            "Dumbo", "Bambi", "Alice in Wonderland", "Tinker Bell",
        ],
    },
    OptionGroup {
        label: "🎬 Pixar",
        kind: OptionKind::Character,
        items: &[
            "Toy Story", "Finding Nemo", "The Incredibles", "WALL-E", "Up", "Inside Out",
            "Coco", "Turning Red", "Monsters Inc", "Brave / Merida", "Elemental",
        ],
    },
    OptionGroup {
        label: "🎀 Sanrio",
        kind: OptionKind::Character,
        items: &[
            "Hello Kitty", "My Melody", "Kuromi", "Cinnamoroll", "Pompompurin", "Pochacco",
            "Badtz-Maru", "Little Twin Stars", "Gudetama", "Keroppi", "Hangyodon",
            "Tuxedo Sam", "Aggretsuko",
        ],
    },
];

pub const COLORS: &[ColorOption] = &[
    ColorOption { name: "Black", hex: "#1a1a1a", localized: "黑色", border: None },
    ColorOption { name: "White", hex: "#f8f8f0", localized: "白色", border: Some("#ccc") },
    ColorOption { name: "Ivory", hex: "#f5f0e0", localized: "奶油色", border: Some("#ccc") },
    ColorOption { name: "Beige", hex: "#d4b896", localized: "米色", border: None },
    ColorOption { name: "Dusty Pink", hex: "#e8a9a0", localized: "粉红色", border: None },
    ColorOption { name: "Hot Pink", hex: "#e91e8c", localized: "玫红色", border: None },
    ColorOption { name: "Burgundy", hex: "#6d1f2e", localized: "酒红色", border: None },
    ColorOption { name: "Red", hex: "#c0392b", localized: "红色", border: None },
    ColorOption { name: "Coral", hex: "#e8735a", localized: "珊瑚色", border: None },
    ColorOption { name: "Orange", hex: "#e67e22", localized: "橙色", border: None },
    ColorOption { name: "Mustard", hex: "#d4a017", localized: "芥末黄", border: None },
    ColorOption { name: "Yellow", hex: "#f7dc6f", localized: "黄色", border: None },
    ColorOption { name: "Mint", hex: "#a8e6cf", localized: "薄荷绿", border: None },
    ColorOption { name: "Sage", hex: "#87a878", localized: "灰绿色", border: None },
    ColorOption { name: "Forest", hex: "#2d6a4f", localized: "墨绿色", border: None },
    ColorOption { name: "Baby Blue", hex: "#aec6cf", localized: "淡蓝色", border: None },
    ColorOption { name: "Cobalt", hex: "#2c5282", localized: "深蓝色", border: None },
    ColorOption { name: "Navy", hex: "#1a2744", localized: "藏青色", border: None },
    ColorOption { name: "Lavender", hex: "#c9b1ff", localized: "薰衣草紫", border: None },
    ColorOption { name: "Purple", hex: "#7b2d8b", localized: "紫色", border: None },
    ColorOption { name: "Lilac", hex: "#d4b8e0", localized: "淡紫色", border: None },
    ColorOption { name: "Brown", hex: "#795548", localized: "棕色", border: None },
    ColorOption { name: "Camel", hex: "#c19a6b", localized: "驼色", border: None },
    ColorOption { name: "Grey", hex: "#9e9e9e", localized: "灰色", border: None },
    ColorOption { name: "Gold", hex: "#d4a017", localized: "金色", border: None },
    ColorOption { name: "Silver", hex: "#b0bec5", localized: "银色", border: None },
];

/// The option groups that apply in a realm, in display order.
pub fn option_groups(realm: Realm) -> &'static [OptionGroup] {
    match realm {
        Realm::Fashion => FASHION_GROUPS,
        Realm::Home => HOME_GROUPS,
        Realm::Character => CHARACTER_GROUPS,
    }
}

/// The fixed color palette. Display order = generation preference order.
pub fn color_palette() -> &'static [ColorOption] {
    COLORS
}

/// Label Translation Table lookup. Labels without an entry pass through
/// unchanged; that is policy, not an error.
pub fn translate(label: &str) -> &str {
    label_translation(label).unwrap_or(label)
}

/// Inspiration alias lookup. The input is trimmed and case-folded for
/// the match; a miss returns the original text unchanged, so empty
/// input yields empty output.
pub fn translate_inspiration(text: &str) -> &str {
    let normalized = text.trim().to_lowercase();
    inspiration_alias(&normalized).unwrap_or(text)
}

fn label_translation(label: &str) -> Option<&'static str> {
    match label {
        "T-Shirt" => Some("短袖T恤"),
        "Dress" => Some("连衣裙"),
        "Bodysuit" => Some("连体衣"),
        "Underwear" => Some("内衣内裤"),
        "Scarf" => Some("围巾"),
        "Coat" => Some("外套大衣"),
        "Jeans" => Some("牛仔裤"),
        "Shorts" => Some("短裤"),
        "Bikini" => Some("比基尼泳衣"),
        "Shoes" => Some("鞋子"),
        "Bag" => Some("包包"),
        "Gloves" => Some("手套"),
        "Hat" => Some("帽子"),
        "Jewelry" => Some("首饰"),
        "Loafers" => Some("乐福鞋"),
        "Heels" => Some("高跟鞋"),
        "Socks" => Some("袜子"),
        "Ballet Flats" => Some("芭蕾平底鞋"),
        "Skirt" => Some("半身裙"),
        "Cardigan" => Some("开衫毛衣"),
        "Corset" => Some("束身衣马甲"),
        "Nightwear" => Some("睡衣家居服"),
        "Trench Coat" => Some("风衣外套"),
        "Blazer" => Some("西装外套"),
        "Jumpsuit" => Some("连体裤"),
        "Bedroom" => Some("卧室"),
        "Bathroom" => Some("浴室卫生间"),
        "Kitchen" => Some("厨房"),
        "Living Room" => Some("客厅"),
        "Study / Office" => Some("书房办公室"),
        "Balcony / Garden" => Some("阳台花园"),
        "Nursery" => Some("婴儿房儿童房"),
        "Entryway" => Some("玄关"),
        "Bedding / Sheets" => Some("床上用品四件套"),
        "Pillow / Cushion" => Some("抱枕靠垫"),
        "Curtains" => Some("窗帘"),
        "Rug" => Some("地毯"),
        "Lamp" => Some("台灯落地灯"),
        "Wall Art" => Some("装饰画"),
        "Vase" => Some("花瓶"),
        "Mug / Cup" => Some("马克杯"),
        "Towel" => Some("毛巾浴巾"),
        "Soap Dispenser" => Some("洗手液瓶皂液器"),
        "Storage Box" => Some("收纳盒"),
        "Candle" => Some("香薰蜡烛"),
        "Mirror" => Some("镜子"),
        "Plush Toy" => Some("毛绒玩具"),
        "Diffuser" => Some("香薰扩散器"),
        "Tray" => Some("托盘"),
        "Flower Pot" => Some("花盆"),
        "Clock" => Some("挂钟"),
        "Photo Frame" => Some("相框"),
        "Cottagecore" => Some("田园风碎花"),
        "Dark Academia" => Some("学院风复古"),
        "Coquette" => Some("可爱少女风丝带"),
        "Y2K" => Some("Y2K千禧风"),
        "Fairycore" => Some("仙女风"),
        "Goth" => Some("哥特暗黑风"),
        "Balletcore" => Some("芭蕾风"),
        "Vintage" => Some("复古vintage风"),
        "Minimal" => Some("简约极简风"),
        "Streetwear" => Some("街头嘻哈风"),
        "Preppy" => Some("学院风preppy"),
        "Boho" => Some("波西米亚风"),
        "Kawaii" => Some("可爱卡哇伊风"),
        "Lolita" => Some("洛丽塔"),
        "Baroque" => Some("宫廷复古巴洛克风"),
        "Clean Girl" => Some("奶油肤色简洁穿搭"),
        "Old Money" => Some("贵族感复古穿搭"),
        "Mob Wife" => Some("名媛皮草风"),
        "Grunge" => Some("朋克grunge风"),
        "Mermaidcore" => Some("美人鱼风"),
        "Witchcore" => Some("女巫神秘风"),
        "Royalcore" => Some("宫廷皇室风"),
        "Japandi" => Some("侘寂风日式"),
        "Maximalist" => Some("华丽繁复风"),
        "Minimalist" => Some("极简北欧风"),
        "French Vintage" => Some("法式复古"),
        "Fairytale" => Some("童话风"),
        "Dark Moody" => Some("暗黑氛围感"),
        "Pastel" => Some("马卡龙莫兰迪色"),
        "Industrial" => Some("工业loft风"),
        "Mickey & Minnie" => Some("米奇米妮"),
        "Cinderella" => Some("灰姑娘"),
        "Ariel" => Some("小美人鱼爱丽儿"),
        "Belle" => Some("美女与野兽贝儿"),
        "Rapunzel" => Some("长发公主乐佩"),
        "Sleeping Beauty" => Some("睡美人奥罗拉"),
        "Snow White" => Some("白雪公主"),
        "Elsa & Anna" => Some("冰雪奇缘爱莎安娜"),
        "Moana" => Some("海洋奇缘莫阿娜"),
        "Encanto" => Some("魔法满屋"),
        "Stitch" => Some("星际宝贝史迪仔"),
        "Winnie the Pooh" => Some("小熊维尼"),
        "Dumbo" => Some("小飞象"),
        "Bambi" => Some("小鹿斑比"),
        "Alice in Wonderland" => Some("爱丽丝梦游仙境"),
        "Tinker Bell" => Some("小叮当"),
        "Toy Story" => Some("玩具总动员"),
        "Finding Nemo" => Some("海底总动员"),
        "The Incredibles" => Some("超人总动员"),
        "WALL-E" => Some("机器人总动员WALL-E"),
        "Up" => Some("飞屋环游记"),
        "Inside Out" => Some("头脑特工队"),
        "Coco" => Some("寻梦环游记可可"),
        "Turning Red" => Some("青春变形记小美"),
        "Monsters Inc" => Some("怪兽电力公司"),
        "Brave / Merida" => Some("勇敢传说"),
        "Elemental" => Some("元素方城市"),
        "Hello Kitty" => Some("HelloKitty凯蒂猫"),
        "My Melody" => Some("My Melody美乐蒂"),
        "Kuromi" => Some("Kuromi酷洛米"),
        "Cinnamoroll" => Some("玉桂狗"),
        "Pompompurin" => Some("布丁狗Pompompurin"),
        "Pochacco" => Some("Pochacco帕恰狗"),
        "Badtz-Maru" => Some("酷企鹅"),
        "Little Twin Stars" => Some("双子星KiKiLaLa"),
        "Gudetama" => Some("蛋黄哥"),
        "Keroppi" => Some("青蛙可洛比"),
        "Hangyodon" => Some("人魚汉顿"),
        "Tuxedo Sam" => Some("小企鹅山姆"),
        "Aggretsuko" => Some("烈怒熊猫"),
        _ => None,
    }
}

fn inspiration_alias(alias: &str) -> Option<&'static str> {
    match alias {
        "taylor swift" => Some("泰勒斯威夫特风格"),
        "zendaya" => Some("赞达亚穿搭"),
        "bridgerton" => Some("布里奇顿宫廷风"),
        "sailor moon" => Some("美少女战士"),
        "euphoria" => Some("euphoria欧美妆造"),
        "korean" => Some("韩系穿搭"),
        "japanese" => Some("日系穿搭"),
        "french" => Some("法式穿搭"),
        "rihanna" => Some("蕾哈娜风格"),
        "beyonce" => Some("碧昂斯风格"),
        "blackpink" => Some("blackpink同款"),
        "twice" => Some("twice同款"),
        "kpop" => Some("韩系kpop风"),
        _ => None,
    }
}
