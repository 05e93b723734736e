//! Markdown templates for the widget pages.
//!
//! Every function here is pure: it takes catalog data and returns the full
//! document text. Writing and overwrite policy live in `generator`.

use crate::alphabetical::letter_groups;
use crate::catalog::{CatalogEntry, Category};

const NAME_SEPARATOR: &str = " · ";

/// Fixed "which widget do I need" table in the global index.
pub const USE_CASES: &[(&str, &[&str])] = &[
    ("显示文字", &["Text", "RichText"]),
    ("显示图片", &["Image", "FadeInImage"]),
    ("按钮交互", &["ElevatedButton", "TextButton", "IconButton"]),
    ("输入文本", &["TextField", "TextFormField"]),
    ("列表展示", &["ListView", "GridView"]),
    ("页面布局", &["Scaffold", "AppBar", "BottomNavigationBar"]),
    ("弹窗提示", &["Dialog", "SnackBar", "BottomSheet"]),
    ("动画效果", &["AnimatedContainer", "Hero"]),
];

/// Stub page for a single widget.
pub fn widget_doc(entry: &CatalogEntry, category: &Category) -> String {
    let name = &entry.name;
    let category_name = &category.display_name;
    let url = &entry.url;
    format!(
        r#"# {name}

`{name}` 是 Flutter {category_name}之一。

## 基本用法

```dart
{name}(
  // 属性配置
)
```

## 常用属性

| 属性 | 类型 | 说明 |
|------|------|------|
| - | - | 待补充 |

## 完整示例

```dart
import 'package:flutter/material.dart';

class {name}Demo extends StatelessWidget {{
  @override
  Widget build(BuildContext context) {{
    return Scaffold(
      appBar: AppBar(title: Text('{name} 示例')),
      body: Center(
        child: {name}(
          // TODO: 添加属性
        ),
      ),
    );
  }}
}}
```

## 最佳实践

1. 待补充

## 相关组件

- 待补充

## 官方文档

- [{name} API]({url})
"#
    )
}

/// Overview page listing every widget of one category, in catalog order.
pub fn category_index(category: &Category) -> String {
    let name = &category.display_name;
    let links = category
        .items
        .iter()
        .map(|entry| format!("- [{}](./{})", entry.name, entry.file_stem()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"# {name}

本节介绍 Flutter 中常用的{name}。

## 组件列表

{links}
"#
    )
}

/// Top-level page: category navigation, use-case table and alphabetical lookup.
pub fn main_index(categories: &[Category]) -> String {
    let mut content = String::from(
        r#"# Widget 大全

Flutter 提供了丰富的 Widget 来构建用户界面。本文档整理了常用 Widget 的详细说明和使用示例。

## 分类导航

"#,
    );

    for category in categories {
        let names = category
            .items
            .iter()
            .map(|entry| format!("`{}`", entry.name))
            .collect::<Vec<_>>()
            .join(NAME_SEPARATOR);
        content.push_str(&format!(
            "### [{}](./{}/)\n\n{}\n\n",
            category.display_name, category.key, names
        ));
    }

    let use_cases = USE_CASES
        .iter()
        .map(|(need, widgets)| format!("| {} | {} |\n", need, widgets.join(", ")))
        .collect::<String>();
    content.push_str(&format!(
        "\n## 如何选择 Widget\n\n| 需求 | 推荐 Widget |\n|------|------------|\n{use_cases}"
    ));

    content.push_str("\n## 快速查找\n\n按首字母查找：\n\n");
    for group in letter_groups(categories) {
        let links = group
            .entries
            .iter()
            .map(|indexed| format!("[{}]({})", indexed.entry.name, indexed.href()))
            .collect::<Vec<_>>()
            .join(NAME_SEPARATOR);
        content.push_str(&format!("**{}**: {}\n\n", group.letter, links));
    }

    content
}
