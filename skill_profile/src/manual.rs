/*!

This is the long-form manual for `skill_profile` and `skillstack`.

## Input formats

The following formats are supported:
* `csv` Comma Separated Values, as downloaded from a Google Forms response sheet
* `xlsx` Excel spreadsheets, as exported by Google Forms or Microsoft Forms

In both cases the first row holds the headers and every following row holds
the answers of one person.

```text
Timestamp,Username,Visual Design [Typography],Visual Design [Color],Front End [CSS]
2019/03/01 10:00:00,alice,High,Low,Medium
2019/03/01 10:05:00,bob,Medium,Medium,None
```

### Headers

Except for the identifier and timestamp columns, every header must follow the
pattern `Category [Sub-category]`. This is the naming that Google Forms uses
for the rows of a **Multiple Choice Grid** question: the question is the
category, each row of the grid is a sub-category.

- the category is everything before the first `[`, kept as is. In the
  example above, the category is `Visual Design ` with a trailing space.
- the sub-category is the text between the first `[` and the next `]`,
  without leading spaces.

A header without a bracketed group stops the processing.

### Answers

Answers are matched exactly (including case):

| answer   | score |
|----------|-------|
| `High`   | 3     |
| `Medium` | 2     |
| `Low`    | 1     |
| `None`   | 0     |

Any other answer, including an empty cell, stops the processing.

### Reserved columns

The identifier column (`Username` by default) names the person. It must be
present and non-empty in every row. When the same identifier appears on
several rows, the last row replaces the previous ones, and the person keeps
its first position in the list.

The timestamp column (`Timestamp` by default) is ignored.

The identifier `Team Stack Average` is reserved for the team profile.

## Computation

For every person, the score of each sub-category is stored under its category,
and the average of each category is the mean of its scores (not rounded).

The team profile contains every sub-category answered by at least one person.
Its score is the sum of the scores of the people who answered it, divided by
the **total number of people**, then rounded to the nearest score. Halves are
rounded up: `2.5` becomes `3`, `1.5` becomes `2`.

> Note: a sub-category that only some people answered is averaged over the
> whole team. The people who did not answer it count as `None`.

The category averages of the team are computed from these rounded scores.

## Configuration

`skillstack` accepts a configuration file in JSON:

```json
{
  "outputSettings": {
    "stackName": "Design Team Stack",
    "outputDirectory": "output"
  },
  "surveySources": [
    {
      "provider": "csv",
      "filePath": "Design Team Stack Poll.csv",
      "identifierColumn": "Username",
      "timestampColumn": "Timestamp"
    }
  ]
}
```

- `provider` (string): `csv` or `xlsx`.
- `filePath` (string): relative to the location of the configuration file.
- `identifierColumn`, `timestampColumn` (string, optional): the names of the
  reserved columns. All the sources must use the same names.
- `excelWorksheetName` (string, optional): for `xlsx` inputs, the worksheet to
  read. It can be omitted when the workbook has a single worksheet.

The rows of all the sources are processed in order, as if they came from a
single file.

## Output

The `--out` flag writes a JSON summary with the list of people (the team last)
and, for each of them, the scores by category and the category averages. The
summary also contains the configuration of the radar chart and the bars of the
category breakdown, ready for display.

 */
